//! UpdateUnitHandler - renames a measurement unit.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UnitId};
use crate::domain::unit::MeasurementUnit;
use crate::ports::UnitRepository;

/// Command to update a measurement unit.
#[derive(Debug, Clone)]
pub struct UpdateUnitCommand {
    pub id: UnitId,
    pub name: String,
    pub abbreviation: String,
}

/// Handler for unit updates. Uniqueness checks exclude the unit itself.
pub struct UpdateUnitHandler {
    units: Arc<dyn UnitRepository>,
}

impl UpdateUnitHandler {
    pub fn new(units: Arc<dyn UnitRepository>) -> Self {
        Self { units }
    }

    pub async fn handle(&self, cmd: UpdateUnitCommand) -> Result<MeasurementUnit, DomainError> {
        let existing = self.units.get_by_id(&cmd.id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::UnitNotFound, "Measurement unit not found")
        })?;

        let updated = existing.renamed(&cmd.name, &cmd.abbreviation, Timestamp::now())?;

        if let Some(by_name) = self.units.get_by_name(updated.name()).await? {
            if by_name.id() != updated.id() {
                return Err(DomainError::rule_violated(
                    "A measurement unit with this name already exists",
                ));
            }
        }
        if let Some(by_abbr) = self
            .units
            .get_by_abbreviation(updated.abbreviation())
            .await?
        {
            if by_abbr.id() != updated.id() {
                return Err(DomainError::rule_violated(
                    "A measurement unit with this abbreviation already exists",
                ));
            }
        }

        self.units.update(&updated).await?;
        Ok(updated)
    }
}
