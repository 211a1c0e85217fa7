//! Handlers for the `/venues` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use limelight_core::error::CoreError;
use limelight_core::types::DbId;
use limelight_core::venue::validate_venue;
use limelight_db::models::venue::{CreateVenue, UpdateVenue, Venue};
use limelight_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    validate_venue(
        &input.venue_name,
        &input.city,
        input.total_capacity,
        input.seat_kills,
        input.comps,
        input.producer_holds,
        input.venue_rental,
        input.extra_show_fee,
        input.hourly_extra_rate,
    )
    .map_err(AppError::Core)?;

    let venue = VenueRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// GET /api/v1/venues
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Venue>>> {
    let venues = VenueRepo::list(&state.pool).await?;
    Ok(Json(venues))
}

/// GET /api/v1/venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Venue>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;
    Ok(Json(venue))
}

/// PUT /api/v1/venues/{id}
///
/// Validates the venue as it will be after the patch, so a partial update
/// can never push a stored venue out of the rule set.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<Json<Venue>> {
    let current = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;

    validate_venue(
        input.venue_name.as_deref().unwrap_or(&current.venue_name),
        input.city.as_deref().unwrap_or(&current.city),
        input.total_capacity.unwrap_or(current.total_capacity),
        input.seat_kills.unwrap_or(current.seat_kills),
        input.comps.unwrap_or(current.comps),
        input.producer_holds.unwrap_or(current.producer_holds),
        input.venue_rental.unwrap_or(current.venue_rental),
        input.extra_show_fee.unwrap_or(current.extra_show_fee),
        input
            .hourly_extra_rate
            .unwrap_or(current.hourly_extra_rate),
    )
    .map_err(AppError::Core)?;

    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;
    Ok(Json(venue))
}

/// DELETE /api/v1/venues/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = VenueRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Venue", id }))
    }
}
