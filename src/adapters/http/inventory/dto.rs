//! HTTP DTOs for inventory session endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::inventory::{CountView, SessionProductItem, SessionSummary};
use crate::domain::foundation::{ProductId, UnitId, WarehouseId};
use crate::domain::inventory::InventorySession;
use crate::ports::SessionStatusFilter;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create an inventory session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub warehouse_id: WarehouseId,
    /// Any instant inside the target month; normalized server-side.
    pub period: DateTime<Utc>,
}

/// Request to attach products to a session.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSessionProductsRequest {
    pub product_ids: Vec<ProductId>,
}

/// Request to register a count.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountRequest {
    pub product_id: ProductId,
    pub packaging_quantity: i64,
    #[serde(default)]
    pub measure_unit_id: Option<UnitId>,
}

/// Query parameters for the session listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSessionsParams {
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    /// "YYYY-MM".
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub status: Option<SessionStatusFilter>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session as returned by create/close.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub warehouse_id: String,
    pub period: String,
    pub count_number: i32,
    pub created_by: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    pub status: &'static str,
}

impl From<&InventorySession> for SessionResponse {
    fn from(session: &InventorySession) -> Self {
        Self {
            id: session.id().to_string(),
            warehouse_id: session.warehouse_id().to_string(),
            period: session.period().to_string(),
            count_number: session.count_number(),
            created_by: session.created_by().to_string(),
            created_at: session.created_at().to_rfc3339(),
            closed_at: session.closed_at().map(|t| t.to_rfc3339()),
            status: if session.is_closed() { "CLOSED" } else { "OPEN" },
        }
    }
}

/// Denormalized session row for list/detail views.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummaryResponse {
    pub id: String,
    pub warehouse_id: String,
    pub warehouse_description: String,
    pub period: String,
    pub count_number: i32,
    pub created_by_id: String,
    pub created_by_name: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    pub status: &'static str,
    pub products_count: u64,
}

impl From<SessionSummary> for SessionSummaryResponse {
    fn from(summary: SessionSummary) -> Self {
        let status = if summary.closed_at.is_some() {
            "CLOSED"
        } else {
            "OPEN"
        };
        Self {
            id: summary.id.to_string(),
            warehouse_id: summary.warehouse_id.to_string(),
            warehouse_description: summary.warehouse_description,
            period: summary.period.to_string(),
            count_number: summary.count_number,
            created_by_id: summary.created_by_id.to_string(),
            created_by_name: summary.created_by_name,
            created_at: summary.created_at.to_rfc3339(),
            closed_at: summary.closed_at.map(|t| t.to_rfc3339()),
            status,
            products_count: summary.products_count,
        }
    }
}

/// Result of attaching products.
#[derive(Debug, Clone, Serialize)]
pub struct AddSessionProductsResponse {
    pub added: usize,
}

/// One product attached to a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionProductResponse {
    pub product_id: String,
    pub code: String,
    pub description: String,
}

impl From<SessionProductItem> for SessionProductResponse {
    fn from(item: SessionProductItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            code: item.code,
            description: item.description,
        }
    }
}

/// Product details embedded in a count response.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub code: String,
    pub description: String,
    pub conversion_factor: f64,
}

/// Measurement unit details embedded in a count response.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSummary {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

/// One registered (or pending) count.
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub product: ProductSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_unit: Option<UnitSummary>,
    pub packaging_quantity: i64,
    pub total_units: i64,
    pub created_at: String,
}

impl From<CountView> for CountResponse {
    fn from(view: CountView) -> Self {
        let product = match &view.product {
            Some(product) => ProductSummary {
                id: product.id().to_string(),
                code: product.code().to_string(),
                description: product.description().to_string(),
                conversion_factor: product.conversion_factor(),
            },
            // dangling product reference degrades to empty fields
            None => ProductSummary {
                id: view.count.product_id().to_string(),
                code: String::new(),
                description: String::new(),
                conversion_factor: 1.0,
            },
        };
        Self {
            product,
            measure_unit: view.measure_unit.as_ref().map(|unit| UnitSummary {
                id: unit.id().to_string(),
                name: unit.name().to_string(),
                abbreviation: unit.abbreviation().to_string(),
            }),
            packaging_quantity: view.count.quantity_packages(),
            total_units: view.count.quantity_units(),
            created_at: view.count.created_at().to_rfc3339(),
        }
    }
}
