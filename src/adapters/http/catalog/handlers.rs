//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::catalog::{ListProductsHandler, ListWarehousesHandler};

use super::dto::{ProductResponse, WarehouseResponse};

#[derive(Clone)]
pub struct CatalogHandlers {
    pub list_products: Arc<ListProductsHandler>,
    pub list_warehouses: Arc<ListWarehousesHandler>,
}

/// GET /api/products
pub async fn list_products(
    State(handlers): State<CatalogHandlers>,
    RequireAuth(_actor): RequireAuth,
) -> Response {
    match handlers.list_products.handle().await {
        Ok(products) => {
            let body: Vec<ProductResponse> = products.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/warehouses
pub async fn list_warehouses(
    State(handlers): State<CatalogHandlers>,
    RequireAuth(_actor): RequireAuth,
) -> Response {
    match handlers.list_warehouses.handle().await {
        Ok(warehouses) => {
            let body: Vec<WarehouseResponse> = warehouses.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}
