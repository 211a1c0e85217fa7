//! Route definitions for productions and their nested resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{production, recoupment, scenario, show};
use crate::state::AppState;

/// Routes mounted at `/productions`.
///
/// ```text
/// GET    /                                 -> list
/// POST   /                                 -> create
/// GET    /{id}                             -> get_by_id
/// PUT    /{id}                             -> update
/// DELETE /{id}                             -> delete
/// GET    /{production_id}/shows            -> show list
/// POST   /{production_id}/shows            -> show create
/// GET    /{production_id}/scenarios        -> scenario list
/// POST   /{production_id}/scenarios        -> scenario create
/// GET    /{production_id}/recoupment       -> projection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(production::list).post(production::create))
        .route(
            "/{id}",
            get(production::get_by_id)
                .put(production::update)
                .delete(production::delete),
        )
        .route(
            "/{production_id}/shows",
            get(show::list_by_production).post(show::create),
        )
        .route(
            "/{production_id}/scenarios",
            get(scenario::list_by_production).post(scenario::create),
        )
        .route("/{production_id}/recoupment", get(recoupment::projection))
}
