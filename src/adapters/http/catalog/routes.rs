//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_products, list_warehouses, CatalogHandlers};

/// Creates the product router.
pub fn product_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_products))
        .with_state(handlers)
}

/// Creates the warehouse router.
pub fn warehouse_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_warehouses))
        .with_state(handlers)
}
