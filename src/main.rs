use std::io;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_booking_api::auth::JwtKeys;
use hotel_booking_api::config::Config;
use hotel_booking_api::{configure, db};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config).await.map_err(io::Error::other)?;

    log::info!("Running migrations...");
    db::run_migrations(&pool).await.map_err(io::Error::other)?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let pool_data = web::Data::new(pool);
    let keys_data = web::Data::new(JwtKeys::new(&config.jwt_secret));

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(keys_data.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
