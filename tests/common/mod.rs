#![allow(dead_code)]

use hotel_booking_api::auth::{Claims, JwtKeys};
use hotel_booking_api::db;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const SECRET: &str = "test-secret";

/// Builds the app around `$pool` with the test signing key.
#[macro_export]
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new(
                    hotel_booking_api::auth::JwtKeys::new($crate::common::SECRET),
                ))
                .configure(hotel_booking_api::configure),
        )
        .await
    };
}

/// A fresh in-memory database. One connection, so every query sees the
/// same database.
pub async fn pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    db::run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn insert_hotel(pool: &SqlitePool, name: &str, available: Option<i64>, total: i64) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO hotels (name, city, address, price, total_rooms, available_rooms)
        VALUES (?, 'Lisbon', 'Rua Augusta 1', 120.0, ?, ?)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(total)
    .bind(available)
    .fetch_one(pool)
    .await
    .expect("insert hotel")
}

pub async fn available_rooms(pool: &SqlitePool, hotel_id: i64) -> Option<i64> {
    sqlx::query_scalar("SELECT available_rooms FROM hotels WHERE id = ?")
        .bind(hotel_id)
        .fetch_one(pool)
        .await
        .expect("hotel row")
}

pub async fn booking_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .expect("count")
}

pub async fn booking_status(pool: &SqlitePool, booking_id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM bookings WHERE id = ?")
        .bind(booking_id)
        .fetch_one(pool)
        .await
        .expect("booking row")
}

pub fn token(user_id: &str, role: &str) -> String {
    let claims = Claims {
        id: user_id.to_string(),
        role: role.to_string(),
        name: Some(format!("User {user_id}")),
        email: Some(format!("{user_id}@example.com")),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    JwtKeys::new(SECRET).sign(&claims).expect("sign token")
}

pub fn bearer(user_id: &str, role: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token(user_id, role)))
}

pub fn booking_body(hotel_id: i64) -> serde_json::Value {
    serde_json::json!({
        "hotelId": hotel_id,
        "checkIn": "2026-11-01",
        "checkOut": "2026-11-04",
        "guests": 2
    })
}
