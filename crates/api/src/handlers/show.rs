//! Handlers for shows, nested under productions for creation/listing and
//! flat for item-level operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use limelight_core::error::CoreError;
use limelight_core::types::DbId;
use limelight_db::models::show::{CreateShow, Show, UpdateShow};
use limelight_db::repositories::{ProductionRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/productions/{production_id}/shows
///
/// Assigns the next show number within the production and seeds the new
/// show's budget from the category templates.
pub async fn create(
    State(state): State<AppState>,
    Path(production_id): Path<DbId>,
    Json(input): Json<CreateShow>,
) -> AppResult<(StatusCode, Json<Show>)> {
    ensure_production_exists(&state, production_id).await?;
    let show = ShowRepo::create(&state.pool, production_id, &input).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

/// GET /api/v1/productions/{production_id}/shows
pub async fn list_by_production(
    State(state): State<AppState>,
    Path(production_id): Path<DbId>,
) -> AppResult<Json<Vec<Show>>> {
    ensure_production_exists(&state, production_id).await?;
    let shows = ShowRepo::list_by_production(&state.pool, production_id).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Show>> {
    let show = ShowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    Ok(Json(show))
}

/// PUT /api/v1/shows/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShow>,
) -> AppResult<Json<Show>> {
    let show = ShowRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    Ok(Json(show))
}

/// DELETE /api/v1/shows/{id}
///
/// The show's budget items cascade at the schema level.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ShowRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Show", id }))
    }
}

async fn ensure_production_exists(state: &AppState, production_id: DbId) -> AppResult<()> {
    ProductionRepo::find_by_id(&state.pool, production_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id: production_id,
        }))?;
    Ok(())
}
