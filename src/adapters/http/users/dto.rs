//! HTTP DTOs for user administration endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::users::UserListItem;
use crate::domain::foundation::{UserRole, WarehouseId};
use crate::domain::user::User;

/// Request to create a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub identification: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
    #[serde(default)]
    pub warehouse_ids: Vec<WarehouseId>,
}

/// Request to update a user. Absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub identification: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub warehouse_ids: Option<Vec<WarehouseId>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Request to trigger a corporate directory sync.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncUsersRequest {
    #[serde(default = "default_sync_limit")]
    pub limit: u32,
}

fn default_sync_limit() -> u32 {
    100
}

/// Warehouse reference in a user response.
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseRefResponse {
    pub id: String,
    pub name: String,
}

/// One row of the user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub id: String,
    pub identification: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub warehouses: Vec<WarehouseRefResponse>,
    pub is_active: bool,
}

impl From<UserListItem> for UserListResponse {
    fn from(item: UserListItem) -> Self {
        Self {
            id: item.id.to_string(),
            identification: item.identification,
            name: item.name,
            email: item.email,
            role: item.role.to_string(),
            warehouses: item
                .warehouses
                .into_iter()
                .map(|w| WarehouseRefResponse {
                    id: w.id.to_string(),
                    name: w.name,
                })
                .collect(),
            is_active: item.is_active,
        }
    }
}

/// User response for create/update (warehouse ids only, no names).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub identification: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub warehouse_ids: Vec<String>,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            identification: user.identification().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            role: user.role().to_string(),
            warehouse_ids: user
                .warehouse_ids()
                .iter()
                .map(|w| w.to_string())
                .collect(),
            is_active: user.is_active(),
        }
    }
}

/// Result of a directory sync.
#[derive(Debug, Clone, Serialize)]
pub struct SyncUsersResponse {
    pub created: u32,
}
