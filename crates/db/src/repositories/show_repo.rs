//! Repository for the `shows` table.

use limelight_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{CreateShow, Show, UpdateShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, production_id, venue_id, show_number, local_date, local_time, \
    status, notes, created_at, updated_at";

/// Provides CRUD operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show under a production, returning the created row.
    ///
    /// The show number is assigned as one past the production's current
    /// highest, and the new show's budget is seeded with one line per
    /// budget category template (`unit = 'unit'`, `number = 1`,
    /// `rate = 0`). Both happen in a single transaction so a failed seed
    /// never leaves a budget-less show behind.
    pub async fn create(
        pool: &PgPool,
        production_id: DbId,
        input: &CreateShow,
    ) -> Result<Show, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO shows (production_id, venue_id, show_number, local_date, local_time, status, notes)
             SELECT $1, $2, COALESCE(MAX(show_number), 0) + 1, $3, $4, COALESCE($5, 'planned'), $6
             FROM shows WHERE production_id = $1
             RETURNING {COLUMNS}"
        );
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(production_id)
            .bind(input.venue_id)
            .bind(input.local_date)
            .bind(input.local_time)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        let seeded = sqlx::query(
            "INSERT INTO budget_items
                (show_id, summary_group, department, sub_department, line_item, unit, number, rate, notes)
             SELECT $1, summary_group, department, sub_department, line_item, 'unit', 1, 0, notes
             FROM budget_categories
             ORDER BY id",
        )
        .bind(show.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(
            show_id = show.id,
            seeded = seeded.rows_affected(),
            "Seeded show budget from category templates"
        );
        Ok(show)
    }

    /// Find a show by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List shows belonging to a production, in show-number order.
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE production_id = $1
             ORDER BY show_number"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// List shows for a set of productions at once, ordered so callers can
    /// group them without re-sorting.
    pub async fn list_by_production_ids(
        pool: &PgPool,
        production_ids: &[DbId],
    ) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE production_id = ANY($1)
             ORDER BY production_id, show_number"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(production_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a show. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShow,
    ) -> Result<Option<Show>, sqlx::Error> {
        let query = format!(
            "UPDATE shows SET
                venue_id = COALESCE($2, venue_id),
                local_date = COALESCE($3, local_date),
                local_time = COALESCE($4, local_time),
                status = COALESCE($5, status),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .bind(input.venue_id)
            .bind(input.local_date)
            .bind(input.local_time)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a show by ID; its budget items cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
