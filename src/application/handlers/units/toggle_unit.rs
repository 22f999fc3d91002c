//! ToggleUnitHandler - flips a measurement unit's active flag.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UnitId};
use crate::domain::unit::MeasurementUnit;
use crate::ports::UnitRepository;

/// Command to toggle a measurement unit.
#[derive(Debug, Clone)]
pub struct ToggleUnitCommand {
    pub id: UnitId,
}

pub struct ToggleUnitHandler {
    units: Arc<dyn UnitRepository>,
}

impl ToggleUnitHandler {
    pub fn new(units: Arc<dyn UnitRepository>) -> Self {
        Self { units }
    }

    pub async fn handle(&self, cmd: ToggleUnitCommand) -> Result<MeasurementUnit, DomainError> {
        let existing = self.units.get_by_id(&cmd.id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::UnitNotFound, "Measurement unit not found")
        })?;

        let toggled = existing.toggled(Timestamp::now());
        self.units.update(&toggled).await?;
        Ok(toggled)
    }
}
