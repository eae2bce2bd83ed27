use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate};
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::booking::{CreateBooking, NewBooking};
use crate::services::bookings;

/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Boundary validation for a booking request; fills name and email from the
/// token when the body leaves them out.
pub fn validate_request(user: &AuthUser, body: CreateBooking) -> AppResult<NewBooking> {
    body.validate()?;

    let hotel_id = body
        .hotel_id
        .ok_or_else(|| AppError::InvalidInput("Hotel is required".into()))?;

    let (check_in, check_out) = match (body.check_in.as_deref(), body.check_out.as_deref()) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => {
            return Err(AppError::InvalidInput(
                "Check-in and check-out are required".into(),
            ))
        }
    };
    let (check_in, check_out) = match (parse_date(check_in), parse_date(check_out)) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(AppError::InvalidInput("Invalid dates".into())),
    };
    if check_in >= check_out {
        return Err(AppError::InvalidInput(
            "Check-out must be after check-in".into(),
        ));
    }

    let claims = &user.0;
    let name = body
        .name
        .or_else(|| claims.name.clone())
        .ok_or_else(|| AppError::InvalidInput("Name is required".into()))?;
    let email = body
        .email
        .or_else(|| claims.email.clone())
        .ok_or_else(|| AppError::InvalidInput("Email is required".into()))?;

    Ok(NewBooking {
        user_id: claims.id.clone(),
        hotel_id,
        name,
        email,
        check_in,
        check_out,
        guests: body.guests.unwrap_or(1),
    })
}

pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    user: AuthUser,
    body: web::Json<CreateBooking>,
) -> AppResult<HttpResponse> {
    let new = validate_request(&user, body.into_inner())?;
    let booking = bookings::create_booking(pool.get_ref(), new).await?;
    Ok(HttpResponse::Created().json(booking))
}

pub async fn list_my_bookings(
    pool: web::Data<SqlitePool>,
    user: AuthUser,
) -> AppResult<HttpResponse> {
    let bookings = bookings::list_for_user(pool.get_ref(), user.id()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn get_booking(
    pool: web::Data<SqlitePool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let booking =
        bookings::get_booking(pool.get_ref(), path.into_inner(), user.id(), user.0.is_admin())
            .await?;
    Ok(HttpResponse::Ok().json(booking))
}

pub async fn cancel_booking(
    pool: web::Data<SqlitePool>,
    user: AuthUser,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let booking = bookings::cancel_booking(pool.get_ref(), path.into_inner(), user.id()).await?;
    Ok(HttpResponse::Ok().json(booking))
}
