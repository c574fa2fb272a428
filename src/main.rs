#[macro_use]
extern crate diesel;

mod auth;
mod booking;
mod config;
mod database;
mod directory;
mod models;
mod protocol;
mod schema;
mod utils;

use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

use crate::config::Config;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body("Hospital Appointment Booking Service")
}

#[get("/test_db")]
async fn test_db(pool: web::Data<DbPool>) -> impl Responder {
    match probe_db(&pool).await {
        Ok(()) => HttpResponse::Ok().body("Database Connected Successfully!"),
        Err(err) => HttpResponse::Ok().body(format!("Database Connection Failed: {}", err)),
    }
}

async fn probe_db(pool: &web::Data<DbPool>) -> anyhow::Result<()> {
    use diesel::prelude::*;

    let conn = database::get_db_conn(pool)?;
    web::block(move || diesel::sql_query("SELECT 1").execute(&conn)).await?;
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().expect("invalid configuration");

    let manager = ConnectionManager::<MysqlConnection>::new(config.database_url.clone());
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    log::info!("listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .wrap(middleware::Logger::default())
            .service(index)
            .service(test_db)
            .configure(auth::config)
            .configure(booking::config)
            .configure(directory::config)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
