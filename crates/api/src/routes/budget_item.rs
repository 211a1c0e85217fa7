//! Route definitions for flat budget item operations.

use axum::routing::put;
use axum::Router;

use crate::handlers::budget_item;
use crate::state::AppState;

/// Routes mounted at `/budget-items`.
///
/// ```text
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(budget_item::update).delete(budget_item::delete),
    )
}
