//! HTTP routes for measurement unit endpoints.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use super::handlers::{create_unit, list_units, toggle_unit, update_unit, UnitHandlers};

/// Creates the measurement unit router.
pub fn unit_routes(handlers: UnitHandlers) -> Router {
    Router::new()
        .route("/", get(list_units))
        .route("/", post(create_unit))
        .route("/:id", put(update_unit))
        .route("/:id/toggle", patch(toggle_unit))
        .with_state(handlers)
}
