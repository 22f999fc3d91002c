//! Inventory count repository port.
//!
//! The count table doubles as the session-product membership record; the
//! storage layer enforces uniqueness per (session, product) and adapters
//! translate that conflict into a rule violation.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProductId, SessionId};
use crate::domain::inventory::InventoryCount;

/// Repository port for inventory count persistence.
#[async_trait]
pub trait CountRepository: Send + Sync {
    /// Save a new count row.
    ///
    /// # Errors
    ///
    /// - `RuleViolated` when the (session, product) constraint rejects
    ///   the insert
    /// - `DatabaseError` on persistence failure
    async fn save(&self, count: &InventoryCount) -> Result<(), DomainError>;

    /// All counts for a session, ordered by creation time ascending
    /// (stable audit order).
    async fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<InventoryCount>, DomainError>;

    /// Whether a count row exists for (session, product).
    async fn exists_by_session_and_product(
        &self,
        session_id: &SessionId,
        product_id: &ProductId,
    ) -> Result<bool, DomainError>;

    /// Number of count rows in a session.
    async fn count_by_session(&self, session_id: &SessionId) -> Result<u64, DomainError>;
}
