//! Handlers for budget items and the grouped show budget view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use limelight_core::budget::{self, BudgetLine};
use limelight_core::currency::format_gbp;
use limelight_core::error::CoreError;
use limelight_core::types::DbId;
use limelight_core::validate::validate_non_negative;
use limelight_db::models::budget_item::{BudgetItem, CreateBudgetItem, UpdateBudgetItem};
use limelight_db::repositories::{BudgetItemRepo, ShowRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Grouped budget view
// ---------------------------------------------------------------------------

/// One budget line with its derived cost, as rendered in the budget table.
#[derive(Debug, Serialize)]
pub struct BudgetItemView {
    #[serde(flatten)]
    pub item: BudgetItem,
    pub total: f64,
    pub total_display: String,
}

/// A summary group with its lines and subtotal, in first-seen order.
#[derive(Debug, Serialize)]
pub struct BudgetGroupView {
    pub summary_group: String,
    pub items: Vec<BudgetItemView>,
    pub subtotal: f64,
    pub subtotal_display: String,
}

/// The complete budget table for one show.
#[derive(Debug, Serialize)]
pub struct ShowBudgetView {
    pub show_id: DbId,
    pub groups: Vec<BudgetGroupView>,
    pub grand_total: f64,
    pub grand_total_display: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/shows/{show_id}/budget-items
pub async fn create(
    State(state): State<AppState>,
    Path(show_id): Path<DbId>,
    Json(input): Json<CreateBudgetItem>,
) -> AppResult<(StatusCode, Json<BudgetItem>)> {
    ensure_show_exists(&state, show_id).await?;
    validate_amounts(input.number, input.rate, input.details.as_deref())?;

    let item = BudgetItemRepo::create(&state.pool, show_id, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/shows/{show_id}/budget-items
pub async fn list_by_show(
    State(state): State<AppState>,
    Path(show_id): Path<DbId>,
) -> AppResult<Json<Vec<BudgetItem>>> {
    ensure_show_exists(&state, show_id).await?;
    let items = BudgetItemRepo::list_by_show(&state.pool, show_id).await?;
    Ok(Json(items))
}

/// GET /api/v1/shows/{show_id}/budget
///
/// The grouped budget table: lines bucketed by summary group in first-seen
/// order, with per-line totals, group subtotals, and the grand total.
pub async fn show_budget(
    State(state): State<AppState>,
    Path(show_id): Path<DbId>,
) -> AppResult<Json<ShowBudgetView>> {
    ensure_show_exists(&state, show_id).await?;
    let items = BudgetItemRepo::list_by_show(&state.pool, show_id).await?;

    let lines: Vec<BudgetLine> = items
        .iter()
        .map(|item| BudgetLine {
            summary_group: item.summary_group.clone(),
            number: item.number,
            rate: item.rate,
        })
        .collect();
    let totals = budget::summarize(&lines);

    // Bucket the full rows in the same first-seen group order summarize uses.
    let mut grouped: Vec<(String, Vec<BudgetItemView>)> = Vec::new();
    for item in items {
        let view = BudgetItemView {
            total: budget::line_total(item.number, item.rate),
            total_display: format_gbp(budget::line_total(item.number, item.rate)),
            item,
        };
        match grouped
            .iter_mut()
            .find(|(group, _)| *group == view.item.summary_group)
        {
            Some((_, items)) => items.push(view),
            None => grouped.push((view.item.summary_group.clone(), vec![view])),
        }
    }

    let groups = grouped
        .into_iter()
        .zip(totals.groups)
        .map(|((summary_group, items), group_total)| BudgetGroupView {
            summary_group,
            items,
            subtotal: group_total.subtotal,
            subtotal_display: format_gbp(group_total.subtotal),
        })
        .collect();

    Ok(Json(ShowBudgetView {
        show_id,
        groups,
        grand_total: totals.grand_total,
        grand_total_display: format_gbp(totals.grand_total),
    }))
}

/// PUT /api/v1/budget-items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudgetItem>,
) -> AppResult<Json<BudgetItem>> {
    validate_amounts(input.number, input.rate, input.details.as_deref())?;

    let item = BudgetItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetItem",
            id,
        }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/budget-items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BudgetItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetItem",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn validate_amounts(
    number: Option<f64>,
    rate: Option<f64>,
    details: Option<&str>,
) -> AppResult<()> {
    if let Some(number) = number {
        validate_non_negative(number, "number").map_err(AppError::Core)?;
    }
    if let Some(rate) = rate {
        validate_non_negative(rate, "rate").map_err(AppError::Core)?;
    }
    if let Some(details) = details {
        budget::validate_details(details).map_err(AppError::Core)?;
    }
    Ok(())
}

async fn ensure_show_exists(state: &AppState, show_id: DbId) -> AppResult<()> {
    ShowRepo::find_by_id(&state.pool, show_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Show",
            id: show_id,
        }))?;
    Ok(())
}
