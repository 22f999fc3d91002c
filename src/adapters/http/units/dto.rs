//! HTTP DTOs for measurement unit endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::unit::MeasurementUnit;

/// Request to create a measurement unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnitRequest {
    pub name: String,
    pub abbreviation: String,
}

/// Request to update a measurement unit.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUnitRequest {
    pub name: String,
    pub abbreviation: String,
}

/// Measurement unit response body.
#[derive(Debug, Clone, Serialize)]
pub struct UnitResponse {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub is_active: bool,
}

impl From<&MeasurementUnit> for UnitResponse {
    fn from(unit: &MeasurementUnit) -> Self {
        Self {
            id: unit.id().to_string(),
            name: unit.name().to_string(),
            abbreviation: unit.abbreviation().to_string(),
            is_active: unit.is_active(),
        }
    }
}
