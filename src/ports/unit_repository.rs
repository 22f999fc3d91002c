//! Measurement unit repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UnitId};
use crate::domain::unit::MeasurementUnit;

/// Repository port for measurement unit persistence.
///
/// Name and abbreviation are unique; the storage constraints back up the
/// application-level pre-checks and adapters translate conflicts into
/// rule violations.
#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// Find a unit by its ID. Returns `None` if not found.
    async fn get_by_id(&self, id: &UnitId) -> Result<Option<MeasurementUnit>, DomainError>;

    /// Batch lookup by ID set, for response enrichment without N+1.
    async fn get_by_ids(&self, ids: &[UnitId]) -> Result<Vec<MeasurementUnit>, DomainError>;

    /// Find a unit by exact name. Returns `None` if not found.
    async fn get_by_name(&self, name: &str) -> Result<Option<MeasurementUnit>, DomainError>;

    /// Find a unit by (uppercase) abbreviation. Returns `None` if not found.
    async fn get_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<MeasurementUnit>, DomainError>;

    /// All active units, ordered by name.
    async fn list_active(&self) -> Result<Vec<MeasurementUnit>, DomainError>;

    /// Persist a new unit.
    async fn save(&self, unit: &MeasurementUnit) -> Result<(), DomainError>;

    /// Replace an existing unit snapshot.
    ///
    /// # Errors
    ///
    /// - `UnitNotFound` if the unit doesn't exist
    async fn update(&self, unit: &MeasurementUnit) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn unit_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UnitRepository) {}
    }
}
