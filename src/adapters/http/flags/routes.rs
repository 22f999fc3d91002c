//! HTTP routes for feature flag endpoints.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use super::handlers::{create_flag, list_flags, toggle_flag, update_flag, FlagHandlers};

/// Creates the feature flag router.
pub fn flag_routes(handlers: FlagHandlers) -> Router {
    Router::new()
        .route("/", get(list_flags))
        .route("/", post(create_flag))
        .route("/:id", put(update_flag))
        .route("/:id/toggle", patch(toggle_flag))
        .with_state(handlers)
}
