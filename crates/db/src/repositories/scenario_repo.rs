//! Repository for the `recoupment_scenarios` table.

use limelight_core::types::DbId;
use sqlx::PgPool;

use crate::models::scenario::{CreateScenario, RecoupmentScenario, UpdateScenario};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, production_id, name, vat_rate, agent_commission_rate, royalty_rate, \
    solt_levy_amount, rest_levy_per_seat, number_of_seats, gross_box_office_potential, \
    created_at, updated_at";

/// Name given to the scenario created automatically for a production that
/// has none.
pub const DEFAULT_SCENARIO_NAME: &str = "Default Scenario";

/// Provides CRUD operations for recoupment scenarios.
pub struct ScenarioRepo;

impl ScenarioRepo {
    /// Insert a new scenario under a production, returning the created row.
    pub async fn create(
        pool: &PgPool,
        production_id: DbId,
        input: &CreateScenario,
    ) -> Result<RecoupmentScenario, sqlx::Error> {
        let query = format!(
            "INSERT INTO recoupment_scenarios
                (production_id, name, vat_rate, agent_commission_rate, royalty_rate,
                 solt_levy_amount, rest_levy_per_seat, number_of_seats,
                 gross_box_office_potential)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecoupmentScenario>(&query)
            .bind(production_id)
            .bind(&input.name)
            .bind(input.vat_rate)
            .bind(input.agent_commission_rate)
            .bind(input.royalty_rate)
            .bind(input.solt_levy_amount)
            .bind(input.rest_levy_per_seat)
            .bind(input.number_of_seats)
            .bind(input.gross_box_office_potential)
            .fetch_one(pool)
            .await
    }

    /// Insert the automatic scenario for a production with no scenarios.
    /// Every parameter is left unset so the documented defaults apply.
    pub async fn create_default(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<RecoupmentScenario, sqlx::Error> {
        let query = format!(
            "INSERT INTO recoupment_scenarios (production_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecoupmentScenario>(&query)
            .bind(production_id)
            .bind(DEFAULT_SCENARIO_NAME)
            .fetch_one(pool)
            .await
    }

    /// Find a scenario by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecoupmentScenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recoupment_scenarios WHERE id = $1");
        sqlx::query_as::<_, RecoupmentScenario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a production's scenarios, oldest first. The first scenario is
    /// the one activated by default in projections.
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<RecoupmentScenario>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recoupment_scenarios
             WHERE production_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, RecoupmentScenario>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// Update a scenario. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScenario,
    ) -> Result<Option<RecoupmentScenario>, sqlx::Error> {
        let query = format!(
            "UPDATE recoupment_scenarios SET
                name = COALESCE($2, name),
                vat_rate = COALESCE($3, vat_rate),
                agent_commission_rate = COALESCE($4, agent_commission_rate),
                royalty_rate = COALESCE($5, royalty_rate),
                solt_levy_amount = COALESCE($6, solt_levy_amount),
                rest_levy_per_seat = COALESCE($7, rest_levy_per_seat),
                number_of_seats = COALESCE($8, number_of_seats),
                gross_box_office_potential = COALESCE($9, gross_box_office_potential),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecoupmentScenario>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.vat_rate)
            .bind(input.agent_commission_rate)
            .bind(input.royalty_rate)
            .bind(input.solt_levy_amount)
            .bind(input.rest_levy_per_seat)
            .bind(input.number_of_seats)
            .bind(input.gross_box_office_potential)
            .fetch_optional(pool)
            .await
    }

    /// Persist a debounced gross-box-office-potential write. Returns
    /// `true` if the scenario still exists.
    pub async fn update_potential(
        pool: &PgPool,
        id: DbId,
        gross_box_office_potential: f64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE recoupment_scenarios
             SET gross_box_office_potential = $2, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(gross_box_office_potential)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a scenario by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recoupment_scenarios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
