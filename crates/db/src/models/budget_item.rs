//! Budget line-item model and DTOs.

use limelight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `budget_items` table.
///
/// `number × rate` is the line's cost contribution; totals are derived in
/// `limelight_core::budget`, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetItem {
    pub id: DbId,
    pub show_id: DbId,
    pub summary_group: String,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub line_item: Option<String>,
    pub details: String,
    pub unit: String,
    pub number: f64,
    pub rate: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new budget item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudgetItem {
    /// Defaults to `'Uncategorized'` if omitted.
    pub summary_group: Option<String>,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub line_item: Option<String>,
    /// Defaults to `'NULL'` if omitted.
    pub details: Option<String>,
    /// Defaults to `'unit'` if omitted.
    pub unit: Option<String>,
    pub number: Option<f64>,
    pub rate: Option<f64>,
    pub notes: Option<String>,
}

/// DTO for updating an existing budget item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBudgetItem {
    pub summary_group: Option<String>,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub line_item: Option<String>,
    pub details: Option<String>,
    pub unit: Option<String>,
    pub number: Option<f64>,
    pub rate: Option<f64>,
    pub notes: Option<String>,
}
