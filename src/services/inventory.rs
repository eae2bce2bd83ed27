//! Room inventory: the only writers of `hotels.available_rooms`.

use sqlx::SqliteConnection;

use crate::error::{AppError, AppResult};
use crate::models::booking::BookingStatus;

/// Effect of a status change on the hotel's room pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomChange {
    Acquire,
    Release,
    Keep,
}

impl RoomChange {
    pub fn between(from: BookingStatus, to: BookingStatus) -> Self {
        match (from.holds_room(), to.holds_room()) {
            (false, true) => Self::Acquire,
            (true, false) => Self::Release,
            _ => Self::Keep,
        }
    }
}

/// Takes one room from the hotel. Hotels without a tracked counter always
/// succeed and stay untracked.
pub async fn acquire_room(conn: &mut SqliteConnection, hotel_id: i64) -> AppResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE hotels SET available_rooms = available_rooms - 1
        WHERE id = ?
        AND (available_rooms IS NULL OR available_rooms > 0)
        "#,
    )
    .bind(hotel_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 1 {
        return Ok(());
    }

    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM hotels WHERE id = ?")
        .bind(hotel_id)
        .fetch_optional(&mut *conn)
        .await?;

    match exists {
        Some(_) => Err(AppError::NoAvailability),
        None => Err(AppError::NotFound("Hotel")),
    }
}

/// Returns one room to the hotel, never past `total_rooms`.
pub async fn release_room(conn: &mut SqliteConnection, hotel_id: i64) -> AppResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE hotels SET available_rooms = MIN(available_rooms + 1, total_rooms)
        WHERE id = ?
        AND available_rooms IS NOT NULL
        "#,
    )
    .bind(hotel_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        log::debug!("hotel {hotel_id} has no tracked inventory, nothing released");
    }
    Ok(())
}
