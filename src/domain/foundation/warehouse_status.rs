//! WarehouseStatus enum - administrative status of a warehouse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, ErrorCode};

/// Administrative status of a warehouse. Status changes are an admin
/// concern; the rule engine never transitions them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Closed,
}

impl WarehouseStatus {
    /// Returns the persisted string tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseStatus::Active => "ACTIVE",
            WarehouseStatus::Inactive => "INACTIVE",
            WarehouseStatus::Maintenance => "MAINTENANCE",
            WarehouseStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for WarehouseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WarehouseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(WarehouseStatus::Active),
            "INACTIVE" => Ok(WarehouseStatus::Inactive),
            "MAINTENANCE" => Ok(WarehouseStatus::Maintenance),
            "CLOSED" => Ok(WarehouseStatus::Closed),
            other => Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Invalid warehouse status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_string_tag() {
        for status in [
            WarehouseStatus::Active,
            WarehouseStatus::Inactive,
            WarehouseStatus::Maintenance,
            WarehouseStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<WarehouseStatus>().unwrap(), status);
        }
    }

    #[test]
    fn default_is_active() {
        assert_eq!(WarehouseStatus::default(), WarehouseStatus::Active);
    }
}
