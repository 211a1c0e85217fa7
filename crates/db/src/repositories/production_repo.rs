//! Repository for the `productions` table.

use limelight_core::types::DbId;
use sqlx::PgPool;

use crate::models::production::{CreateProduction, Production, UpdateProduction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_name, agent, agent_email, created_at, updated_at";

/// Provides CRUD operations for productions.
pub struct ProductionRepo;

impl ProductionRepo {
    /// Insert a new production, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProduction,
    ) -> Result<Production, sqlx::Error> {
        let query = format!(
            "INSERT INTO productions (artist_name, agent, agent_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(&input.artist_name)
            .bind(&input.agent)
            .bind(&input.agent_email)
            .fetch_one(pool)
            .await
    }

    /// Find a production by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions WHERE id = $1");
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all productions, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions ORDER BY created_at DESC");
        sqlx::query_as::<_, Production>(&query).fetch_all(pool).await
    }

    /// Update a production. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduction,
    ) -> Result<Option<Production>, sqlx::Error> {
        let query = format!(
            "UPDATE productions SET
                artist_name = COALESCE($2, artist_name),
                agent = COALESCE($3, agent),
                agent_email = COALESCE($4, agent_email),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .bind(&input.artist_name)
            .bind(&input.agent)
            .bind(&input.agent_email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a production by ID. Shows, budget items, and scenarios
    /// cascade at the schema level. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM productions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
