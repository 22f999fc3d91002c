//! UpdateUserHandler - partial update of an existing operator.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, UserRole, WarehouseId};
use crate::domain::user::User;
use crate::ports::{PasswordHasher, UserRepository};

/// Command to update a user. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub identification: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    /// A new plain-text password; empty strings are ignored.
    pub password: Option<String>,
    pub warehouse_ids: Option<Vec<WarehouseId>>,
    pub is_active: Option<bool>,
}

/// Handler for user updates. A changed email re-checks uniqueness.
pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, DomainError> {
        let mut user = self
            .users
            .get_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        if let Some(email) = &cmd.email {
            let normalized = email.trim().to_lowercase();
            if normalized != user.email() {
                if self.users.get_by_email(&normalized).await?.is_some() {
                    return Err(DomainError::rule_violated(
                        "A user with this email already exists",
                    ));
                }
                user = user.with_email(&normalized)?;
            }
        }
        if let Some(identification) = &cmd.identification {
            user = user.with_identification(identification);
        }
        if let Some(name) = &cmd.name {
            user = user.with_name(name);
        }
        if let Some(role) = cmd.role {
            user = user.with_role(role);
        }
        if let Some(password) = &cmd.password {
            if !password.is_empty() {
                user = user.with_password_hash(self.hasher.hash(password)?);
            }
        }
        if let Some(warehouse_ids) = cmd.warehouse_ids {
            user = user.with_warehouses(warehouse_ids);
        }
        if let Some(is_active) = cmd.is_active {
            user = user.with_active(is_active);
        }

        let user = user.touched(Timestamp::now());
        self.users.update(&user).await?;
        Ok(user)
    }
}
