//! HTTP routes for user administration endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{create_user, list_users, sync_users, update_user, UserHandlers};

/// Creates the user administration router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/:id", put(update_user))
        .route("/sync", post(sync_users))
        .with_state(handlers)
}
