//! Route definitions for scenario item operations.
//!
//! Scenario creation and listing live under the production router.

use axum::routing::put;
use axum::Router;

use crate::handlers::scenario;
use crate::state::AppState;

/// Routes mounted at `/scenarios`.
///
/// ```text
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/potential    -> debounced potential write
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(scenario::update).delete(scenario::delete))
        .route("/{id}/potential", put(scenario::update_potential))
}
