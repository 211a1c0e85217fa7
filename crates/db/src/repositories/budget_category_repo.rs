//! Repository for the `budget_categories` table.

use limelight_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget_category::{BudgetCategory, CreateBudgetCategory, UpdateBudgetCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, summary_group, department, sub_department, line_item, notes, created_at, updated_at";

/// Provides CRUD operations for budget category templates.
pub struct BudgetCategoryRepo;

impl BudgetCategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBudgetCategory,
    ) -> Result<BudgetCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_categories
                (summary_group, department, sub_department, line_item, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(&input.summary_group)
            .bind(&input.department)
            .bind(&input.sub_department)
            .bind(&input.line_item)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List all categories in insertion order, matching the order in which
    /// they seed a new show's budget.
    pub async fn list(pool: &PgPool) -> Result<Vec<BudgetCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budget_categories ORDER BY id");
        sqlx::query_as::<_, BudgetCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBudgetCategory,
    ) -> Result<Option<BudgetCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_categories SET
                summary_group = COALESCE($2, summary_group),
                department = COALESCE($3, department),
                sub_department = COALESCE($4, sub_department),
                line_item = COALESCE($5, line_item),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(id)
            .bind(&input.summary_group)
            .bind(&input.department)
            .bind(&input.sub_department)
            .bind(&input.line_item)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Already-seeded budget items are untouched.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
