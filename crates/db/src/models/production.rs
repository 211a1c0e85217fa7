//! Production entity model and DTOs.

use limelight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::show::Show;

/// A row from the `productions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Production {
    pub id: DbId,
    pub artist_name: String,
    pub agent: Option<String>,
    pub agent_email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A production together with its shows, as returned by list/get endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionWithShows {
    #[serde(flatten)]
    pub production: Production,
    pub shows: Vec<Show>,
}

/// DTO for creating a new production.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduction {
    pub artist_name: String,
    pub agent: Option<String>,
    pub agent_email: Option<String>,
}

/// DTO for updating an existing production. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduction {
    pub artist_name: Option<String>,
    pub agent: Option<String>,
    pub agent_email: Option<String>,
}
