mod requests;
mod responses;

use crate::{
    auth::utils::get_user_from_token,
    database::get_db_conn,
    models::doctors::{DoctorData, NewDoctor},
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use anyhow::Context;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register_doctor)
        .service(list_doctors)
        .service(search);
}

crate::post_funcs! {
    (register_doctor, "/doctors", RegisterDoctorRequest, SimpleResponse),
    (search, "/search", SearchRequest, SimpleResponse),
}

async fn register_doctor_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterDoctorRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::doctors;

    let info = info.into_inner();
    let data = NewDoctor {
        email: info.email,
        doctorname: info.doctorname,
        dept: info.dept,
    };

    // Public registration, no dedup on email or name.
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(doctors::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("Database error")?;

    Ok(SimpleResponse::ok("Doctor Added Successfully"))
}

#[get("/doctors")]
async fn list_doctors(pool: web::Data<DbPool>) -> impl Responder {
    let response = match list_doctors_impl(pool).await {
        Ok(response) => response,
        Err(err) => ListDoctorsResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

async fn list_doctors_impl(pool: web::Data<DbPool>) -> anyhow::Result<ListDoctorsResponse> {
    use crate::schema::doctors;

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        doctors::table
            .order(doctors::doctorname.asc())
            .get_results::<DoctorData>(&conn)
    })
    .await
    .context("Database error")?;

    let doctors = rows
        .into_iter()
        .map(|data| DoctorItem {
            did: data.did,
            email: data.email,
            doctorname: data.doctorname,
            dept: data.dept,
        })
        .collect();

    Ok(ListDoctorsResponse {
        success: true,
        err: "".to_string(),
        doctors,
    })
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::doctors;

    let info = info.into_inner();
    get_user_from_token(info.login_token, &pool).await?;

    let query = info.search;
    let conn = get_db_conn(&pool)?;
    // Exact match on department or doctor name, first row only. The matched
    // row itself is not returned, only the availability notice.
    let found = web::block(move || {
        doctors::table
            .filter(doctors::dept.eq(&query).or(doctors::doctorname.eq(&query)))
            .first::<DoctorData>(&conn)
            .optional()
    })
    .await
    .context("Database error")?;

    let msg = if found.is_some() {
        "Doctor is Available"
    } else {
        "Doctor Not Found"
    };
    Ok(SimpleResponse::ok(msg))
}
