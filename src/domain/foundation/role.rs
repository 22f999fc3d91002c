//! UserRole enum - the three operator roles of the counting application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, ErrorCode};

/// Role of a user. Persisted as its SCREAMING_SNAKE_CASE string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full access to every warehouse and administrative surface.
    Admin,
    /// Creates sessions and registers counts for assigned warehouses.
    WarehouseManager,
    /// Reviews and closes sessions.
    ProcessLeader,
}

impl UserRole {
    /// Returns the persisted string tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::WarehouseManager => "WAREHOUSE_MANAGER",
            UserRole::ProcessLeader => "PROCESS_LEADER",
        }
    }

    /// Returns true for the administrator role.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "WAREHOUSE_MANAGER" => Ok(UserRole::WarehouseManager),
            "PROCESS_LEADER" => Ok(UserRole::ProcessLeader),
            other => Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!(
                    "Invalid role '{}'. Must be one of: ADMIN, WAREHOUSE_MANAGER, PROCESS_LEADER",
                    other
                ),
            )),
        }
    }
}
