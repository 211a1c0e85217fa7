//! Handlers for recoupment scenarios, including the debounced
//! gross-potential autosave endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use limelight_core::error::CoreError;
use limelight_core::types::DbId;
use limelight_core::validate::{validate_non_negative, validate_required_text, validate_unit_range};
use limelight_db::models::scenario::{CreateScenario, RecoupmentScenario, UpdateScenario};
use limelight_db::repositories::{ProductionRepo, ScenarioRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/productions/{production_id}/scenarios
pub async fn create(
    State(state): State<AppState>,
    Path(production_id): Path<DbId>,
    Json(input): Json<CreateScenario>,
) -> AppResult<(StatusCode, Json<RecoupmentScenario>)> {
    ProductionRepo::find_by_id(&state.pool, production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: production_id,
        }))?;

    validate_required_text(&input.name, "scenario name").map_err(AppError::Core)?;
    validate_fields(
        input.vat_rate,
        input.agent_commission_rate,
        input.royalty_rate,
        input.solt_levy_amount,
        input.rest_levy_per_seat,
        input.number_of_seats,
        input.gross_box_office_potential,
    )?;

    let scenario = ScenarioRepo::create(&state.pool, production_id, &input).await?;
    Ok((StatusCode::CREATED, Json(scenario)))
}

/// GET /api/v1/productions/{production_id}/scenarios
pub async fn list_by_production(
    State(state): State<AppState>,
    Path(production_id): Path<DbId>,
) -> AppResult<Json<Vec<RecoupmentScenario>>> {
    ProductionRepo::find_by_id(&state.pool, production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: production_id,
        }))?;
    let scenarios = ScenarioRepo::list_by_production(&state.pool, production_id).await?;
    Ok(Json(scenarios))
}

/// PUT /api/v1/scenarios/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScenario>,
) -> AppResult<Json<RecoupmentScenario>> {
    if let Some(name) = &input.name {
        validate_required_text(name, "scenario name").map_err(AppError::Core)?;
    }
    validate_fields(
        input.vat_rate,
        input.agent_commission_rate,
        input.royalty_rate,
        input.solt_levy_amount,
        input.rest_levy_per_seat,
        input.number_of_seats,
        input.gross_box_office_potential,
    )?;

    let scenario = ScenarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecoupmentScenario",
            id,
        }))?;
    Ok(Json(scenario))
}

/// DELETE /api/v1/scenarios/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ScenarioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RecoupmentScenario",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Debounced potential autosave
// ---------------------------------------------------------------------------

/// Request body for `PUT /scenarios/{id}/potential`.
#[derive(Debug, Deserialize)]
pub struct UpdatePotential {
    pub gross_box_office_potential: f64,
}

/// Acknowledgement that an autosave has been scheduled.
#[derive(Debug, Serialize)]
pub struct PotentialAccepted {
    pub scenario_id: DbId,
    pub gross_box_office_potential: f64,
}

/// PUT /api/v1/scenarios/{id}/potential
///
/// Schedules a debounced write of the edited potential and returns 202
/// immediately. Rapid successive calls for the same scenario collapse to
/// one UPDATE carrying the last value once the quiescence window elapses.
pub async fn update_potential(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePotential>,
) -> AppResult<(StatusCode, Json<PotentialAccepted>)> {
    ScenarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecoupmentScenario",
            id,
        }))?;
    validate_non_negative(
        input.gross_box_office_potential,
        "gross box office potential",
    )
    .map_err(AppError::Core)?;

    state
        .autosaver
        .submit(id, input.gross_box_office_potential)
        .await;

    Ok((
        StatusCode::ACCEPTED,
        Json(PotentialAccepted {
            scenario_id: id,
            gross_box_office_potential: input.gross_box_office_potential,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn validate_fields(
    vat_rate: Option<f64>,
    agent_commission_rate: Option<f64>,
    royalty_rate: Option<f64>,
    solt_levy_amount: Option<f64>,
    rest_levy_per_seat: Option<f64>,
    number_of_seats: Option<i32>,
    gross_box_office_potential: Option<f64>,
) -> AppResult<()> {
    let rates = [
        (vat_rate, "vat rate"),
        (agent_commission_rate, "agent commission rate"),
        (royalty_rate, "royalty rate"),
    ];
    for (rate, name) in rates {
        if let Some(rate) = rate {
            validate_unit_range(rate, name).map_err(AppError::Core)?;
        }
    }

    let amounts = [
        (solt_levy_amount, "SOLT levy amount"),
        (rest_levy_per_seat, "REST levy per seat"),
        (gross_box_office_potential, "gross box office potential"),
    ];
    for (amount, name) in amounts {
        if let Some(amount) = amount {
            validate_non_negative(amount, name).map_err(AppError::Core)?;
        }
    }

    if let Some(seats) = number_of_seats {
        validate_non_negative(seats as f64, "number of seats").map_err(AppError::Core)?;
    }

    Ok(())
}
