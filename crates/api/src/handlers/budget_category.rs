//! Handlers for the `/categories` resource (budget template lines).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use limelight_core::error::CoreError;
use limelight_core::types::DbId;
use limelight_core::validate::validate_required_text;
use limelight_db::models::budget_category::{
    BudgetCategory, CreateBudgetCategory, UpdateBudgetCategory,
};
use limelight_db::repositories::BudgetCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBudgetCategory>,
) -> AppResult<(StatusCode, Json<BudgetCategory>)> {
    validate_required_text(&input.summary_group, "summary group").map_err(AppError::Core)?;
    let category = BudgetCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BudgetCategory>>> {
    let categories = BudgetCategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudgetCategory>,
) -> AppResult<Json<BudgetCategory>> {
    if let Some(summary_group) = &input.summary_group {
        validate_required_text(summary_group, "summary group").map_err(AppError::Core)?;
    }
    let category = BudgetCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BudgetCategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }))
    }
}
