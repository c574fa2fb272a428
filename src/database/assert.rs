use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_appointment(pool: &web::Data<DbPool>, pid: i32) -> anyhow::Result<()> {
    use crate::schema::patients;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        patients::table
            .filter(patients::pid.eq(pid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("Database error")?;

    if res == 0 {
        bail!("No such appointment");
    }

    Ok(())
}
