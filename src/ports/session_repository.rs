//! Inventory session repository port.
//!
//! Contract for persisting and querying [`InventorySession`] snapshots.
//!
//! # Design
//!
//! - The storage layer enforces uniqueness of (warehouse, period,
//!   count_number); under concurrent creation that constraint, not the
//!   application-level cap check, is the race-safety backstop. Adapters
//!   translate the conflict into a rule violation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Period, SessionId, WarehouseId};
use crate::domain::inventory::InventorySession;

/// Open/closed filter for session listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatusFilter {
    Open,
    Closed,
}

/// Filters for [`SessionRepository::list_filtered`]. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// Restrict to one warehouse.
    pub warehouse_id: Option<WarehouseId>,

    /// Restrict to one normalized month.
    pub period: Option<Period>,

    /// Restrict by open/closed state.
    pub status: Option<SessionStatusFilter>,
}

/// Repository port for inventory session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `RuleViolated` when the (warehouse, period, count_number)
    ///   constraint rejects the insert
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &InventorySession) -> Result<(), DomainError>;

    /// Update an existing session (close).
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &InventorySession) -> Result<(), DomainError>;

    /// Find a session by its ID. Returns `None` if not found.
    async fn get_by_id(&self, id: &SessionId) -> Result<Option<InventorySession>, DomainError>;

    /// All sessions for a warehouse, any period.
    async fn list_by_warehouse(
        &self,
        warehouse_id: &WarehouseId,
    ) -> Result<Vec<InventorySession>, DomainError>;

    /// Sessions matching the filter, ordered by creation time descending.
    async fn list_filtered(
        &self,
        filter: &SessionFilter,
    ) -> Result<Vec<InventorySession>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }

    #[test]
    fn status_filter_parses_from_lowercase() {
        let open: SessionStatusFilter = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(open, SessionStatusFilter::Open);
        let closed: SessionStatusFilter = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(closed, SessionStatusFilter::Closed);
    }
}
