//! CreateUnitHandler - registers a new measurement unit.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UnitId};
use crate::domain::unit::MeasurementUnit;
use crate::ports::UnitRepository;

/// Command to create a measurement unit.
#[derive(Debug, Clone)]
pub struct CreateUnitCommand {
    pub name: String,
    pub abbreviation: String,
}

/// Handler for unit creation. Name and abbreviation uniqueness is
/// pre-checked here; the storage constraints back it up.
pub struct CreateUnitHandler {
    units: Arc<dyn UnitRepository>,
}

impl CreateUnitHandler {
    pub fn new(units: Arc<dyn UnitRepository>) -> Self {
        Self { units }
    }

    pub async fn handle(&self, cmd: CreateUnitCommand) -> Result<MeasurementUnit, DomainError> {
        let unit = MeasurementUnit::new(
            UnitId::new(),
            &cmd.name,
            &cmd.abbreviation,
            Timestamp::now(),
        )?;

        if self.units.get_by_name(unit.name()).await?.is_some() {
            return Err(DomainError::rule_violated(
                "A measurement unit with this name already exists",
            ));
        }
        if self
            .units
            .get_by_abbreviation(unit.abbreviation())
            .await?
            .is_some()
        {
            return Err(DomainError::rule_violated(
                "A measurement unit with this abbreviation already exists",
            ));
        }

        self.units.save(&unit).await?;
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::units::support::{test_unit, MemUnits};
    use crate::domain::foundation::ErrorCode;

    fn command(name: &str, abbreviation: &str) -> CreateUnitCommand {
        CreateUnitCommand {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
        }
    }

    #[tokio::test]
    async fn creates_unit_with_uppercased_abbreviation() {
        let repo = Arc::new(MemUnits::new());
        let handler = CreateUnitHandler::new(repo.clone());

        let unit = handler.handle(command("Box", "bx")).await.unwrap();

        assert_eq!(unit.abbreviation(), "BX");
        assert!(unit.is_active());
        assert_eq!(repo.saved().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let repo = Arc::new(MemUnits::with_units(vec![test_unit("Box", "BX")]));
        let handler = CreateUnitHandler::new(repo);

        let err = handler.handle(command("Box", "CJ")).await.unwrap_err();
        assert!(err.is_rule_violation());
    }

    #[tokio::test]
    async fn duplicate_abbreviation_is_rejected() {
        let repo = Arc::new(MemUnits::with_units(vec![test_unit("Box", "BX")]));
        let handler = CreateUnitHandler::new(repo);

        let err = handler.handle(command("Crate", "bx")).await.unwrap_err();
        assert!(err.is_rule_violation());
    }

    #[tokio::test]
    async fn empty_name_fails_validation() {
        let handler = CreateUnitHandler::new(Arc::new(MemUnits::new()));

        let err = handler.handle(command("  ", "BX")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
