//! The recoupment projection endpoint.
//!
//! Pulls together everything the projection table needs: the production's
//! derived total cost, the active scenario (created on first load when the
//! production has none), the break-even capacity, and a full financial
//! breakdown per displayed capacity column.

use axum::extract::{Path, Query, State};
use axum::Json;
use limelight_core::budget;
use limelight_core::capacity;
use limelight_core::currency::format_gbp;
use limelight_core::error::CoreError;
use limelight_core::recoupment::{self, Breakdown};
use limelight_core::types::DbId;
use limelight_db::models::scenario::RecoupmentScenario;
use limelight_db::repositories::{BudgetItemRepo, ProductionRepo, ScenarioRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the projection endpoint.
#[derive(Debug, Deserialize)]
pub struct ProjectionParams {
    /// Scenario to activate; defaults to the production's first scenario.
    pub scenario_id: Option<DbId>,
}

/// One column of the projection table.
#[derive(Debug, Serialize)]
pub struct CapacityColumn {
    /// Capacity as a fraction of the gross potential (1.0 = sold out).
    pub capacity: f64,
    /// Column header: a percentage, or `Break Even`.
    pub label: String,
    pub is_break_even: bool,
    pub breakdown: Breakdown,
}

/// The full projection for one production and scenario.
#[derive(Debug, Serialize)]
pub struct RecoupmentProjection {
    pub production_id: DbId,
    pub total_cost: f64,
    pub total_cost_display: String,
    pub gross_box_office_potential: f64,
    /// `None` when break-even is unreachable (deduction rates at or above
    /// 100%).
    pub break_even_capacity: Option<f64>,
    /// The active scenario the columns were computed from.
    pub scenario: RecoupmentScenario,
    /// Every scenario of the production, for the selector.
    pub scenarios: Vec<RecoupmentScenario>,
    pub columns: Vec<CapacityColumn>,
}

/// GET /api/v1/productions/{production_id}/recoupment
pub async fn projection(
    State(state): State<AppState>,
    Path(production_id): Path<DbId>,
    Query(params): Query<ProjectionParams>,
) -> AppResult<Json<RecoupmentProjection>> {
    let production = ProductionRepo::find_by_id(&state.pool, production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: production_id,
        }))?;

    // Total cost is derived fresh from the current budget rows.
    let items = BudgetItemRepo::list_by_production(&state.pool, production.id).await?;
    let total_cost = budget::total_cost(items.iter().map(|i| (i.number, i.rate)));

    // A production always projects against at least one scenario.
    let mut scenarios = ScenarioRepo::list_by_production(&state.pool, production.id).await?;
    if scenarios.is_empty() {
        let default = ScenarioRepo::create_default(&state.pool, production.id).await?;
        tracing::info!(
            production_id = production.id,
            scenario_id = default.id,
            "Created default recoupment scenario"
        );
        scenarios.push(default);
    }

    let scenario = match params.scenario_id {
        Some(id) => scenarios
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "RecoupmentScenario",
                id,
            }))?,
        None => scenarios[0].clone(),
    };

    let resolved = scenario.resolved_params();
    let potential = scenario.potential();

    let break_even = recoupment::break_even_capacity(&resolved, potential, total_cost);

    let columns = capacity::display_capacities(break_even)
        .into_iter()
        .map(|cap| {
            let is_break_even = capacity::is_break_even(cap, break_even);
            CapacityColumn {
                capacity: cap,
                label: if is_break_even {
                    "Break Even".to_string()
                } else {
                    format!("{:.2}%", cap * 100.0)
                },
                is_break_even,
                breakdown: recoupment::project(cap, &resolved, potential, total_cost),
            }
        })
        .collect();

    Ok(Json(RecoupmentProjection {
        production_id: production.id,
        total_cost,
        total_cost_display: format_gbp(total_cost),
        gross_box_office_potential: potential,
        break_even_capacity: break_even.is_finite().then_some(break_even),
        scenario,
        scenarios,
        columns,
    }))
}
