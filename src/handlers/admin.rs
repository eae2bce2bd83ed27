use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::auth::AdminUser;
use crate::error::{AppError, AppResult};
use crate::models::booking::{BookingStatus, UpdateStatus};
use crate::services::bookings;

pub async fn list_bookings(
    pool: web::Data<SqlitePool>,
    _admin: AdminUser,
) -> AppResult<HttpResponse> {
    let bookings = bookings::list_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn update_booking_status(
    pool: web::Data<SqlitePool>,
    admin: AdminUser,
    path: web::Path<i64>,
    body: web::Json<UpdateStatus>,
) -> AppResult<HttpResponse> {
    let status: BookingStatus = body
        .status
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| AppError::InvalidInput("Invalid status".into()))?;

    let id = path.into_inner();
    log::info!("admin {} sets booking {id} to {status}", admin.0.id);
    let booking = bookings::set_status(pool.get_ref(), id, status).await?;
    Ok(HttpResponse::Ok().json(booking))
}
