mod requests;
mod responses;

use crate::{
    auth::utils::get_user_from_token,
    database::{assert, get_db_conn},
    models::patients::{NewPatient, PatientData, UpdatePatient},
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(book)
        .service(bookings)
        .service(edit)
        .service(delete);
}

crate::post_funcs! {
    (book, "/patients", BookRequest, SimpleResponse),
    (bookings, "/bookings", ListBookingsRequest, ListBookingsResponse),
}

crate::post_id_funcs! {
    (edit, "/edit/{pid}", EditBookingRequest, SimpleResponse),
    (delete, "/delete/{pid}", DeleteBookingRequest, SimpleResponse),
}

async fn book_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    get_user_from_token(info.login_token.clone(), &pool).await?;

    // Reject before anything is written.
    crate::utils::assert_phone_number(&info.number)?;

    let data = NewPatient {
        email: info.email,
        name: info.name,
        gender: info.gender,
        slot: info.slot,
        disease: info.disease,
        time: info.time,
        date: info.date,
        dept: info.dept,
        number: info.number,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(patients::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("Database error")?;

    Ok(SimpleResponse::ok("Appointment Booked Successfully"))
}

async fn bookings_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ListBookingsRequest>,
) -> anyhow::Result<ListBookingsResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    let user = get_user_from_token(info.login_token, &pool).await?;
    let scope = user.booking_scope()?.map(str::to_string);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || match scope {
        None => patients::table.get_results::<PatientData>(&conn),
        // Exact, case-sensitive match against the account email.
        Some(email) => patients::table
            .filter(patients::email.eq(&email))
            .get_results::<PatientData>(&conn),
    })
    .await
    .context("Database error")?;

    let booking_items: Vec<BookingItem> = rows
        .into_iter()
        .map(|data| BookingItem {
            pid: data.pid,
            email: data.email,
            name: data.name,
            gender: data.gender,
            slot: data.slot,
            disease: data.disease,
            time: data.time,
            date: data.date,
            dept: data.dept,
            number: data.number,
        })
        .collect();

    Ok(ListBookingsResponse {
        success: true,
        err: "".to_string(),
        bookings: booking_items,
    })
}

async fn edit_impl(
    pool: web::Data<DbPool>,
    pid: i32,
    info: web::Json<EditBookingRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    get_user_from_token(info.login_token.clone(), &pool).await?;
    assert::assert_appointment(&pool, pid).await?;

    let data = UpdatePatient {
        email: info.email,
        name: info.name,
        gender: info.gender,
        slot: info.slot,
        disease: info.disease,
        time: info.time,
        date: info.date,
        dept: info.dept,
        number: info.number,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::update(patients::table.filter(patients::pid.eq(pid)))
            .set(&data)
            .execute(&conn)
    })
    .await
    .context("Database error")?;

    Ok(SimpleResponse::ok("Appointment Updated Successfully"))
}

async fn delete_impl(
    pool: web::Data<DbPool>,
    pid: i32,
    info: web::Json<DeleteBookingRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    get_user_from_token(info.login_token, &pool).await?;
    assert::assert_appointment(&pool, pid).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(patients::table.filter(patients::pid.eq(pid))).execute(&conn)
    })
    .await
    .context("Database error")?;

    Ok(SimpleResponse::ok("Appointment Deleted Successfully"))
}
