use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub rating: f64,
    pub total_rooms: i64,
    /// `None` when the hotel does not track inventory.
    pub available_rooms: Option<i64>,
    pub amenities: Json<Vec<String>>,
    pub images: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    pub fn has_vacancy(&self) -> bool {
        self.available_rooms.map_or(true, |rooms| rooms > 0)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearch {
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
