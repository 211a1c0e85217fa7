pub mod budget_category;
pub mod budget_item;
pub mod health;
pub mod production;
pub mod scenario;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /productions                                 list (shows nested), create
/// /productions/{id}                            get, update, delete
/// /productions/{production_id}/shows           list, create (seeds budget)
/// /productions/{production_id}/scenarios       list, create
/// /productions/{production_id}/recoupment      projection (?scenario_id=)
///
/// /shows/{id}                                  get, update, delete
/// /shows/{show_id}/budget-items                list, create
/// /shows/{show_id}/budget                      grouped budget summary
///
/// /budget-items/{id}                           update, delete
///
/// /venues                                      list, create
/// /venues/{id}                                 get, update, delete
///
/// /categories                                  list, create
/// /categories/{id}                             update, delete
///
/// /scenarios/{id}                              update, delete
/// /scenarios/{id}/potential                    debounced potential write (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Productions (also nests shows, scenarios, and the projection).
        .nest("/productions", production::router())
        // Show-scoped sub-resources (budget items, grouped budget).
        .nest("/shows", show::router())
        // Flat budget item operations.
        .nest("/budget-items", budget_item::router())
        // Venue management.
        .nest("/venues", venue::router())
        // Budget category templates.
        .nest("/categories", budget_category::router())
        // Scenario item operations and the potential autosave.
        .nest("/scenarios", scenario::router())
}
