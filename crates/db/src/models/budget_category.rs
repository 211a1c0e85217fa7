//! Budget category (template line) model and DTOs.
//!
//! Categories are the studio-wide template rows copied into a new show's
//! budget at creation time.

use limelight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `budget_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetCategory {
    pub id: DbId,
    pub summary_group: String,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub line_item: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new budget category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudgetCategory {
    pub summary_group: String,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub line_item: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing budget category. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBudgetCategory {
    pub summary_group: Option<String>,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub line_item: Option<String>,
    pub notes: Option<String>,
}
