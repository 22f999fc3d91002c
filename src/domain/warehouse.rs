//! Warehouse entity.
//!
//! Warehouses are created by seed or admin tooling; the rule engine only
//! reads them (scoping, read-model enrichment). Status changes are an
//! administrative operation outside the counting rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, WarehouseId, WarehouseStatus};

/// A physical warehouse that inventory sessions are counted against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    code: String,
    description: String,
    is_active: bool,
    status: WarehouseStatus,
    status_description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Warehouse {
    /// Reconstitute a warehouse from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: WarehouseId,
        code: String,
        description: String,
        is_active: bool,
        status: WarehouseStatus,
        status_description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            code,
            description,
            is_active,
            status,
            status_description,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &WarehouseId {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn status(&self) -> WarehouseStatus {
        self.status
    }

    pub fn status_description(&self) -> Option<&str> {
        self.status_description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
