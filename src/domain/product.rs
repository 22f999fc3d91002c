//! Product entity.
//!
//! A product is counted in packaging units and stored in base inventory
//! units; `conversion_factor` relates the two (packaging -> inventory).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, Timestamp, UnitId};

/// A product eligible for inventory counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    code: String,
    description: String,
    inventory_unit_id: UnitId,
    packaging_unit_id: UnitId,
    conversion_factor: f64,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Product {
    /// Reconstitute a product from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProductId,
        code: String,
        description: String,
        inventory_unit_id: UnitId,
        packaging_unit_id: UnitId,
        conversion_factor: f64,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            code,
            description,
            inventory_unit_id,
            packaging_unit_id,
            conversion_factor,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inventory_unit_id(&self) -> &UnitId {
        &self.inventory_unit_id
    }

    pub fn packaging_unit_id(&self) -> &UnitId {
        &self.packaging_unit_id
    }

    /// Packaging-to-inventory conversion factor, always positive.
    pub fn conversion_factor(&self) -> f64 {
        self.conversion_factor
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
