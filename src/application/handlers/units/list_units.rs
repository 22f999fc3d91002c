//! ListUnitsHandler - active measurement units for selection lists.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::unit::MeasurementUnit;
use crate::ports::UnitRepository;

pub struct ListUnitsHandler {
    units: Arc<dyn UnitRepository>,
}

impl ListUnitsHandler {
    pub fn new(units: Arc<dyn UnitRepository>) -> Self {
        Self { units }
    }

    pub async fn handle(&self) -> Result<Vec<MeasurementUnit>, DomainError> {
        self.units.list_active().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::units::support::{test_unit, MemUnits};
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn lists_only_active_units() {
        let active = test_unit("Box", "BX");
        let inactive = test_unit("Crate", "CRT").toggled(Timestamp::now());
        let handler =
            ListUnitsHandler::new(Arc::new(MemUnits::with_units(vec![active, inactive])));

        let units = handler.handle().await.unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].name(), "Box");
    }
}
