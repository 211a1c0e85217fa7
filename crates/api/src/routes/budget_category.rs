//! Route definitions for budget category templates.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::budget_category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(budget_category::list).post(budget_category::create))
        .route(
            "/{id}",
            put(budget_category::update).delete(budget_category::delete),
        )
}
