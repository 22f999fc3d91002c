//! HTTP DTOs for catalog endpoints.

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::warehouse::Warehouse;

/// Product response body.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub code: String,
    pub description: String,
    pub inventory_unit_id: String,
    pub packaging_unit_id: String,
    pub conversion_factor: f64,
    pub is_active: bool,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            code: product.code().to_string(),
            description: product.description().to_string(),
            inventory_unit_id: product.inventory_unit_id().to_string(),
            packaging_unit_id: product.packaging_unit_id().to_string(),
            conversion_factor: product.conversion_factor(),
            is_active: product.is_active(),
        }
    }
}

/// Warehouse response body.
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseResponse {
    pub id: String,
    pub code: String,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    pub is_active: bool,
}

impl From<&Warehouse> for WarehouseResponse {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id().to_string(),
            code: warehouse.code().to_string(),
            description: warehouse.description().to_string(),
            status: warehouse.status().to_string(),
            status_description: warehouse.status_description().map(|s| s.to_string()),
            is_active: warehouse.is_active(),
        }
    }
}
