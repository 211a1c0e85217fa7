//! Repository for the `budget_items` table.

use limelight_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget_item::{BudgetItem, CreateBudgetItem, UpdateBudgetItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, show_id, summary_group, department, sub_department, line_item, \
    details, unit, number, rate, notes, created_at, updated_at";

/// Provides CRUD operations for budget line items.
pub struct BudgetItemRepo;

impl BudgetItemRepo {
    /// Insert a new budget item under a show, returning the created row.
    ///
    /// If `summary_group` is `None`, defaults to `'Uncategorized'`.
    /// If `details` is `None`, defaults to `'NULL'`.
    /// If `unit` is `None`, defaults to `'unit'`.
    /// If `number`/`rate` are `None`, default to 0.
    pub async fn create(
        pool: &PgPool,
        show_id: DbId,
        input: &CreateBudgetItem,
    ) -> Result<BudgetItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_items
                (show_id, summary_group, department, sub_department, line_item,
                 details, unit, number, rate, notes)
             VALUES ($1, COALESCE($2, 'Uncategorized'), $3, $4, $5,
                     COALESCE($6, 'NULL'), COALESCE($7, 'unit'),
                     COALESCE($8, 0), COALESCE($9, 0), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(show_id)
            .bind(&input.summary_group)
            .bind(&input.department)
            .bind(&input.sub_department)
            .bind(&input.line_item)
            .bind(&input.details)
            .bind(&input.unit)
            .bind(input.number)
            .bind(input.rate)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a budget item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BudgetItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budget_items WHERE id = $1");
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a show's budget items in insertion order.
    pub async fn list_by_show(pool: &PgPool, show_id: DbId) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budget_items
             WHERE show_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(show_id)
            .fetch_all(pool)
            .await
    }

    /// List every budget item across all shows of a production. Feeds the
    /// total-cost derivation for recoupment projections.
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query = "SELECT bi.* FROM budget_items bi
             JOIN shows s ON s.id = bi.show_id
             WHERE s.production_id = $1
             ORDER BY bi.id";
        sqlx::query_as::<_, BudgetItem>(query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// Update a budget item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBudgetItem,
    ) -> Result<Option<BudgetItem>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_items SET
                summary_group = COALESCE($2, summary_group),
                department = COALESCE($3, department),
                sub_department = COALESCE($4, sub_department),
                line_item = COALESCE($5, line_item),
                details = COALESCE($6, details),
                unit = COALESCE($7, unit),
                number = COALESCE($8, number),
                rate = COALESCE($9, rate),
                notes = COALESCE($10, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(id)
            .bind(&input.summary_group)
            .bind(&input.department)
            .bind(&input.sub_department)
            .bind(&input.line_item)
            .bind(&input.details)
            .bind(&input.unit)
            .bind(input.number)
            .bind(input.rate)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a budget item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
