//! HTTP routes for inventory session endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    add_session_products, close_inventory_session, create_inventory_session,
    get_inventory_session, list_inventory_counts, list_inventory_sessions, list_session_products,
    register_inventory_count, InventoryHandlers,
};

/// Creates the inventory session router with all endpoints.
pub fn inventory_routes(handlers: InventoryHandlers) -> Router {
    Router::new()
        .route("/", get(list_inventory_sessions))
        .route("/", post(create_inventory_session))
        .route("/:id", get(get_inventory_session))
        .route("/:id/close", put(close_inventory_session))
        .route("/:id/products", post(add_session_products))
        .route("/:id/products", get(list_session_products))
        .route("/:id/counts", post(register_inventory_count))
        .route("/:id/counts", get(list_inventory_counts))
        .with_state(handlers)
}
