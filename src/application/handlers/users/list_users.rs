//! ListUsersHandler - admin user listing with warehouse names resolved.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId, UserRole, WarehouseId};
use crate::ports::{UserRepository, WarehouseRepository};

/// Minimal warehouse reference for display: id plus description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseRef {
    pub id: WarehouseId,
    pub name: String,
}

/// One row of the user listing.
#[derive(Debug, Clone)]
pub struct UserListItem {
    pub id: UserId,
    pub identification: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub warehouses: Vec<WarehouseRef>,
    pub is_active: bool,
}

/// Handler for the user listing. Warehouse names are resolved with one
/// batch lookup across all users, never per row.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>, warehouses: Arc<dyn WarehouseRepository>) -> Self {
        Self { users, warehouses }
    }

    pub async fn handle(&self) -> Result<Vec<UserListItem>, DomainError> {
        let users = self.users.list_all().await?;

        let mut warehouse_ids: Vec<WarehouseId> = users
            .iter()
            .flat_map(|u| u.warehouse_ids().iter().copied())
            .collect();
        warehouse_ids.sort();
        warehouse_ids.dedup();

        let names: HashMap<WarehouseId, String> = self
            .warehouses
            .list_by_ids(&warehouse_ids)
            .await?
            .into_iter()
            .map(|w| (*w.id(), w.description().to_string()))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| UserListItem {
                id: *user.id(),
                identification: user.identification().to_string(),
                name: user.name().to_string(),
                email: user.email().to_string(),
                role: user.role(),
                warehouses: user
                    .warehouse_ids()
                    .iter()
                    .map(|id| WarehouseRef {
                        id: *id,
                        name: names.get(id).cloned().unwrap_or_default(),
                    })
                    .collect(),
                is_active: user.is_active(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::{
        test_user, test_warehouse, MemUserRepo, MemWarehouseRepo,
    };

    #[tokio::test]
    async fn resolves_warehouse_names_per_user() {
        let warehouse = test_warehouse("Central distribution");
        let user = test_user("Ana Torres", UserRole::WarehouseManager)
            .with_warehouses(vec![*warehouse.id()]);
        let handler = ListUsersHandler::new(
            Arc::new(MemUserRepo::with_users(vec![user])),
            Arc::new(MemWarehouseRepo::with_warehouses(vec![warehouse])),
        );

        let items = handler.handle().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].warehouses.len(), 1);
        assert_eq!(items[0].warehouses[0].name, "Central distribution");
    }

    #[tokio::test]
    async fn dangling_assignment_degrades_to_empty_name() {
        let user = test_user("Ana Torres", UserRole::WarehouseManager)
            .with_warehouses(vec![WarehouseId::new()]);
        let handler = ListUsersHandler::new(
            Arc::new(MemUserRepo::with_users(vec![user])),
            Arc::new(MemWarehouseRepo::with_warehouses(vec![])),
        );

        let items = handler.handle().await.unwrap();
        assert_eq!(items[0].warehouses[0].name, "");
    }
}
