//! Warehouse repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WarehouseId};
use crate::domain::warehouse::Warehouse;

/// Repository port for warehouse lookups.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Find a warehouse by its ID. Returns `None` if not found.
    async fn get_by_id(&self, id: &WarehouseId) -> Result<Option<Warehouse>, DomainError>;

    /// All active warehouses, for selection lists.
    async fn list_active(&self) -> Result<Vec<Warehouse>, DomainError>;

    /// Batch lookup by ID set, for read-model enrichment without N+1.
    async fn list_by_ids(&self, ids: &[WarehouseId]) -> Result<Vec<Warehouse>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn warehouse_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WarehouseRepository) {}
    }
}
