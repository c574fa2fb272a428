mod requests;
mod responses;
pub mod utils;

use crate::{
    database::get_db_conn,
    models::{
        user_logins::UserLoginData,
        users::{NewUser, UserData, UserType},
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*, utils::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(signup).service(login).service(logout);
}

crate::post_funcs! {
    (signup, "/signup", SignupRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
}

async fn signup_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SignupRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::users;

    let info = info.into_inner();
    let usertype = UserType::parse(&info.usertype)?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let res = users::table
                .filter(users::email.eq(&info.email))
                .count()
                .get_result::<i64>(&conn)
                .context("Database error")?;
            if res > 0 {
                bail!("Email Already Exists");
            }

            let data = NewUser {
                username: info.username,
                usertype: usertype.as_str().to_string(),
                email: info.email,
                password: hash_password(&info.password),
            };

            diesel::insert_into(users::table)
                .values(data)
                .execute(&conn)
                .context("Database error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok("Signup Successful! Please Login."))
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::{user_logins, users};

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let login_token = web::block(move || {
        conn.transaction(|| {
            let user = users::table
                .filter(users::email.eq(&info.email))
                .get_result::<UserData>(&conn)
                .optional()
                .context("Database error")?;

            // Same failure for unknown email and wrong password.
            let user = match user {
                Some(user) if verify_password(&user.password, &info.password) => user,
                _ => bail!("Invalid Credentials"),
            };

            let login_token = make_login_token(&user.email);
            let token_data = UserLoginData {
                token: login_token.clone(),
                user_id: user.id,
                login_time: Utc::now().naive_utc(),
            };
            diesel::insert_into(user_logins::table)
                .values(token_data)
                .execute(&conn)
                .context("Database error")?;

            Ok(login_token)
        })
    })
    .await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        msg: "Login Successful".to_string(),
        login_token,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::user_logins;

    let info = info.into_inner();
    get_user_from_token(info.login_token.clone(), &pool).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(user_logins::table.filter(user_logins::token.eq(info.login_token)))
            .execute(&conn)
    })
    .await
    .context("Database error")?;

    Ok(SimpleResponse::ok("Logged Out Successfully"))
}
