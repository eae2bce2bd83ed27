use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Lifecycle marker of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum BookingStatus {
    Booked,
    Cancelled,
    Successful,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [Self::Booked, Self::Cancelled, Self::Successful];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Cancelled => "Cancelled",
            Self::Successful => "Successful",
        }
    }

    /// Whether a booking in this status keeps a room out of the hotel's
    /// available pool.
    pub fn holds_room(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(rename = "user")]
    pub user_id: String,
    #[serde(rename = "hotel")]
    pub hotel_id: i64,
    pub name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking joined with the hotel fields shown in booking lists.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: Booking,
    pub hotel_name: String,
    pub hotel_city: Option<String>,
    pub hotel_address: Option<String>,
    pub hotel_price: f64,
}

/// Body of `POST /api/bookings`. Dates arrive as strings so that missing and
/// malformed values get distinct messages.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub hotel_id: Option<i64>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    #[validate(range(min = 1))]
    pub guests: Option<i64>,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// A booking request that passed boundary validation.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: String,
    pub hotel_id: i64,
    pub name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_known_statuses() {
        assert_eq!("Booked".parse(), Ok(BookingStatus::Booked));
        assert_eq!("Successful".parse(), Ok(BookingStatus::Successful));
        assert!("booked".parse::<BookingStatus>().is_err());
        assert!("Pending".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn only_cancelled_releases_the_room() {
        assert!(BookingStatus::Booked.holds_room());
        assert!(BookingStatus::Successful.holds_room());
        assert!(!BookingStatus::Cancelled.holds_room());
    }

    #[test]
    fn booking_serializes_with_api_field_names() {
        let now = Utc::now();
        let booking = Booking {
            id: 7,
            user_id: "u1".into(),
            hotel_id: 3,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            check_in: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            guests: 2,
            status: BookingStatus::Booked,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["user"], "u1");
        assert_eq!(json["hotel"], 3);
        assert_eq!(json["checkIn"], "2026-05-01");
        assert_eq!(json["status"], "Booked");
    }
}
