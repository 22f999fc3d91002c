//! MeasurementUnit entity.
//!
//! Units name the scale a quantity is expressed in (e.g. "Box", "Kilogram").
//! Products reference a unit twice: once as the packaging unit counts are
//! entered in, once as the base inventory unit totals are stored in.
//!
//! # Invariants
//!
//! - `name` is non-empty and unique
//! - `abbreviation` is non-empty, at most 10 characters, uppercase, unique

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, UnitId};

/// Maximum length for a unit abbreviation.
pub const MAX_ABBREVIATION_LENGTH: usize = 10;

/// A measurement unit for entering and storing quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementUnit {
    id: UnitId,
    name: String,
    abbreviation: String,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl MeasurementUnit {
    /// Create a new active measurement unit.
    ///
    /// Trims both fields and uppercases the abbreviation.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name or abbreviation is empty, or the
    ///   abbreviation exceeds [`MAX_ABBREVIATION_LENGTH`] characters
    pub fn new(
        id: UnitId,
        name: &str,
        abbreviation: &str,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;
        let abbreviation = Self::validate_abbreviation(abbreviation)?;
        Ok(Self {
            id,
            name,
            abbreviation,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a unit from persistence (no validation).
    pub fn reconstitute(
        id: UnitId,
        name: String,
        abbreviation: String,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            abbreviation,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UnitId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
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

    /// Returns a snapshot with new name and abbreviation.
    pub fn renamed(
        &self,
        name: &str,
        abbreviation: &str,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: self.id,
            name: Self::validate_name(name)?,
            abbreviation: Self::validate_abbreviation(abbreviation)?,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: now,
        })
    }

    /// Returns a snapshot with the active flag flipped.
    pub fn toggled(&self, now: Timestamp) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
            is_active: !self.is_active,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    fn validate_name(name: &str) -> Result<String, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "is required"));
        }
        Ok(name.to_string())
    }

    fn validate_abbreviation(abbreviation: &str) -> Result<String, DomainError> {
        let abbreviation = abbreviation.trim().to_uppercase();
        if abbreviation.is_empty() {
            return Err(DomainError::validation("abbreviation", "is required"));
        }
        if abbreviation.chars().count() > MAX_ABBREVIATION_LENGTH {
            return Err(DomainError::validation(
                "abbreviation",
                format!("must be at most {} characters", MAX_ABBREVIATION_LENGTH),
            ));
        }
        Ok(abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> MeasurementUnit {
        MeasurementUnit::new(UnitId::new(), "Box", "bx", Timestamp::now()).unwrap()
    }

    #[test]
    fn new_unit_is_active_and_uppercased() {
        let unit = unit();
        assert!(unit.is_active());
        assert_eq!(unit.abbreviation(), "BX");
    }

    #[test]
    fn trims_name_and_abbreviation() {
        let unit = MeasurementUnit::new(UnitId::new(), "  Pallet ", " plt ", Timestamp::now())
            .unwrap();
        assert_eq!(unit.name(), "Pallet");
        assert_eq!(unit.abbreviation(), "PLT");
    }

    #[test]
    fn rejects_empty_name() {
        let result = MeasurementUnit::new(UnitId::new(), "   ", "BX", Timestamp::now());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_abbreviation() {
        let result = MeasurementUnit::new(UnitId::new(), "Box", "  ", Timestamp::now());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_abbreviation_over_ten_chars() {
        let result = MeasurementUnit::new(UnitId::new(), "Box", "ABCDEFGHIJK", Timestamp::now());
        assert!(result.is_err());
    }

    #[test]
    fn renamed_produces_new_snapshot() {
        let unit = unit();
        let renamed = unit.renamed("Crate", "CRT", Timestamp::now()).unwrap();
        assert_eq!(renamed.name(), "Crate");
        assert_eq!(renamed.id(), unit.id());
        assert_eq!(unit.name(), "Box");
    }

    #[test]
    fn toggled_flips_active_flag() {
        let unit = unit();
        let toggled = unit.toggled(Timestamp::now());
        assert!(!toggled.is_active());
        assert!(toggled.toggled(Timestamp::now()).is_active());
    }
}
