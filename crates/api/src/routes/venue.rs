//! Route definitions for venues.

use axum::routing::get;
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list).post(venue::create))
        .route(
            "/{id}",
            get(venue::get_by_id).put(venue::update).delete(venue::delete),
        )
}
