//! Venue entity model and DTOs.

use limelight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub venue_name: String,
    pub city: String,
    pub total_capacity: i32,
    pub seat_kills: i32,
    pub comps: i32,
    pub producer_holds: i32,
    pub venue_rental: f64,
    pub extra_show_fee: f64,
    pub hourly_extra_rate: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new venue. Counts and amounts default to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub venue_name: String,
    pub city: String,
    pub total_capacity: i32,
    #[serde(default)]
    pub seat_kills: i32,
    #[serde(default)]
    pub comps: i32,
    #[serde(default)]
    pub producer_holds: i32,
    #[serde(default)]
    pub venue_rental: f64,
    #[serde(default)]
    pub extra_show_fee: f64,
    #[serde(default)]
    pub hourly_extra_rate: f64,
}

/// DTO for updating an existing venue. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVenue {
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub total_capacity: Option<i32>,
    pub seat_kills: Option<i32>,
    pub comps: Option<i32>,
    pub producer_holds: Option<i32>,
    pub venue_rental: Option<f64>,
    pub extra_show_fee: Option<f64>,
    pub hourly_extra_rate: Option<f64>,
}
