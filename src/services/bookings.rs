//! Booking lifecycle; every status change goes through [`transition`].

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::booking::{Booking, BookingStatus, BookingSummary, NewBooking};
use crate::models::hotel::Hotel;
use crate::services::inventory::{self, RoomChange};

/// Who is asking for a status change.
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    /// A user acting on their own booking; only `Booked -> Cancelled`.
    Owner(&'a str),
    /// An administrator; any status to any status.
    Admin,
}

const SUMMARY_SELECT: &str = r#"
    SELECT b.id, b.user_id, b.hotel_id, b.name, b.email, b.check_in, b.check_out,
           b.guests, b.status, b.created_at, b.updated_at,
           h.name AS hotel_name, h.city AS hotel_city,
           h.address AS hotel_address, h.price AS hotel_price
    FROM bookings b
    JOIN hotels h ON h.id = b.hotel_id
"#;

pub async fn create_booking(pool: &SqlitePool, new: NewBooking) -> AppResult<Booking> {
    let mut tx = db::begin_write(pool).await?;

    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(new.hotel_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound("Hotel"))?;

    if !hotel.has_vacancy() {
        log::info!("hotel {} is full, booking refused", hotel.id);
        return Err(AppError::NoAvailability);
    }

    inventory::acquire_room(&mut tx, hotel.id).await?;

    let now = Utc::now();
    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (user_id, hotel_id, name, email, check_in, check_out, guests, status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&new.user_id)
    .bind(new.hotel_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(new.check_in)
    .bind(new.check_out)
    .bind(new.guests)
    .bind(BookingStatus::Booked)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    log::info!(
        "booking {} created for user {} at hotel {}",
        booking.id,
        booking.user_id,
        booking.hotel_id
    );
    Ok(booking)
}

pub async fn cancel_booking(pool: &SqlitePool, booking_id: i64, user_id: &str) -> AppResult<Booking> {
    transition(pool, booking_id, BookingStatus::Cancelled, Actor::Owner(user_id)).await
}

pub async fn set_status(pool: &SqlitePool, booking_id: i64, status: BookingStatus) -> AppResult<Booking> {
    transition(pool, booking_id, status, Actor::Admin).await
}

pub async fn transition(
    pool: &SqlitePool,
    booking_id: i64,
    target: BookingStatus,
    actor: Actor<'_>,
) -> AppResult<Booking> {
    let mut tx = db::begin_write(pool).await?;

    let booking = find_booking(&mut tx, booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking"))?;

    authorize(&booking, target, actor)?;

    match RoomChange::between(booking.status, target) {
        RoomChange::Acquire => inventory::acquire_room(&mut tx, booking.hotel_id).await?,
        RoomChange::Release => inventory::release_room(&mut tx, booking.hotel_id).await?,
        RoomChange::Keep => {}
    }

    let updated = sqlx::query_as::<_, Booking>(
        "UPDATE bookings SET status = ?, updated_at = ? WHERE id = ? RETURNING *",
    )
    .bind(target)
    .bind(Utc::now())
    .bind(booking_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    log::info!(
        "booking {} moved {} -> {} by {:?}",
        booking_id,
        booking.status,
        target,
        actor
    );
    Ok(updated)
}

/// Checks whether `actor` may move `booking` to `target`.
pub fn authorize(booking: &Booking, target: BookingStatus, actor: Actor<'_>) -> AppResult<()> {
    match actor {
        Actor::Admin => Ok(()),
        Actor::Owner(user_id) => {
            if booking.user_id != user_id {
                return Err(AppError::Forbidden("Not authorized"));
            }
            if booking.status != BookingStatus::Booked || target != BookingStatus::Cancelled {
                return Err(AppError::InvalidState(
                    "Only booked reservations can be cancelled",
                ));
            }
            Ok(())
        }
    }
}

async fn find_booking(conn: &mut SqliteConnection, booking_id: i64) -> AppResult<Option<Booking>> {
    let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
        .bind(booking_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(booking)
}

/// Fetches one booking visible to the caller: its owner, or any admin.
pub async fn get_booking(
    pool: &SqlitePool,
    booking_id: i64,
    user_id: &str,
    is_admin: bool,
) -> AppResult<Booking> {
    let mut conn = pool.acquire().await?;
    let booking = find_booking(&mut conn, booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking"))?;

    if !is_admin && booking.user_id != user_id {
        return Err(AppError::Forbidden("Not authorized"));
    }
    Ok(booking)
}

pub async fn list_for_user(pool: &SqlitePool, user_id: &str) -> AppResult<Vec<BookingSummary>> {
    let sql = format!("{SUMMARY_SELECT} WHERE b.user_id = ? ORDER BY b.created_at DESC, b.id DESC");
    let bookings = sqlx::query_as::<_, BookingSummary>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}

pub async fn list_all(pool: &SqlitePool) -> AppResult<Vec<BookingSummary>> {
    let sql = format!("{SUMMARY_SELECT} ORDER BY b.created_at DESC, b.id DESC");
    let bookings = sqlx::query_as::<_, BookingSummary>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}
