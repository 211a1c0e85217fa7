//! Route definitions for show-level operations and show-scoped budgets.
//!
//! Show creation and listing live under the production router; this module
//! covers item-level show operations and the budget sub-resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{budget_item, show};
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{show_id}/budget-items    -> budget item list
/// POST   /{show_id}/budget-items    -> budget item create
/// GET    /{show_id}/budget          -> grouped budget summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(show::get_by_id).put(show::update).delete(show::delete),
        )
        .route(
            "/{show_id}/budget-items",
            get(budget_item::list_by_show).post(budget_item::create),
        )
        .route("/{show_id}/budget", get(budget_item::show_budget))
}
