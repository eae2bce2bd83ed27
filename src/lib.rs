//! Hotel booking API: bookings against per-hotel room inventory.

use actix_web::{web, HttpResponse};

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use error::AppError;

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Hotel Booking API")
}

/// Registers every route plus the extractor configs that turn malformed
/// bodies and paths into `400 {message}` responses. The caller provides
/// `web::Data<SqlitePool>` and `web::Data<auth::JwtKeys>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(path_config)
        .app_data(query_config)
        .route("/", web::get().to(index))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/hotels")
                        .route("", web::get().to(handlers::hotels::get_hotels))
                        .route("/{id}", web::get().to(handlers::hotels::get_hotel_by_id)),
                )
                .service(
                    web::scope("/bookings")
                        .route("", web::post().to(handlers::bookings::create_booking))
                        .route("/my", web::get().to(handlers::bookings::list_my_bookings))
                        .route("/{id}", web::get().to(handlers::bookings::get_booking))
                        .route(
                            "/{id}/cancel",
                            web::patch().to(handlers::bookings::cancel_booking),
                        ),
                )
                .service(
                    web::scope("/admin")
                        .route("/bookings", web::get().to(handlers::admin::list_bookings))
                        .route(
                            "/bookings/{id}/status",
                            web::patch().to(handlers::admin::update_booking_status),
                        ),
                ),
        );
}
