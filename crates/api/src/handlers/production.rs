//! Handlers for the `/productions` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use limelight_core::error::CoreError;
use limelight_core::types::DbId;
use limelight_core::validate::validate_required_text;
use limelight_db::models::production::{
    CreateProduction, Production, ProductionWithShows, UpdateProduction,
};
use limelight_db::repositories::{ProductionRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/productions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduction>,
) -> AppResult<(StatusCode, Json<Production>)> {
    validate_required_text(&input.artist_name, "artist name").map_err(AppError::Core)?;
    let production = ProductionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(production)))
}

/// GET /api/v1/productions
///
/// Returns every production with its shows nested, most recently created
/// production first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductionWithShows>>> {
    let productions = ProductionRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = productions.iter().map(|p| p.id).collect();
    let shows = ShowRepo::list_by_production_ids(&state.pool, &ids).await?;

    let mut by_production: HashMap<DbId, Vec<_>> = HashMap::new();
    for show in shows {
        by_production.entry(show.production_id).or_default().push(show);
    }

    let nested = productions
        .into_iter()
        .map(|production| {
            let shows = by_production.remove(&production.id).unwrap_or_default();
            ProductionWithShows { production, shows }
        })
        .collect();

    Ok(Json(nested))
}

/// GET /api/v1/productions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductionWithShows>> {
    let production = ProductionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id,
        }))?;
    let shows = ShowRepo::list_by_production(&state.pool, id).await?;
    Ok(Json(ProductionWithShows { production, shows }))
}

/// PUT /api/v1/productions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduction>,
) -> AppResult<Json<Production>> {
    if let Some(artist_name) = &input.artist_name {
        validate_required_text(artist_name, "artist name").map_err(AppError::Core)?;
    }
    let production = ProductionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id,
        }))?;
    Ok(Json(production))
}

/// DELETE /api/v1/productions/{id}
///
/// Shows, budget items, and scenarios cascade at the schema level.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProductionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id,
        }))
    }
}
