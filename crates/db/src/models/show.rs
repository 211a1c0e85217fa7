//! Show entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use limelight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub production_id: DbId,
    pub venue_id: Option<DbId>,
    /// Sequential within a production, assigned at creation.
    pub show_number: i32,
    pub local_date: Option<NaiveDate>,
    pub local_time: Option<NaiveTime>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new show.
///
/// `show_number` is never client-supplied; the repository assigns the next
/// free number within the production. The new show's budget is seeded from
/// the budget category templates in the same transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub venue_id: Option<DbId>,
    pub local_date: Option<NaiveDate>,
    pub local_time: Option<NaiveTime>,
    /// Defaults to `'planned'` if omitted.
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing show. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShow {
    pub venue_id: Option<DbId>,
    pub local_date: Option<NaiveDate>,
    pub local_time: Option<NaiveTime>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
