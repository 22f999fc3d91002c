//! CreateUserHandler - registers a new operator.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId, UserRole, WarehouseId};
use crate::domain::user::User;
use crate::ports::{PasswordHasher, UserRepository};

/// Command to create a user.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub identification: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
    pub warehouse_ids: Vec<WarehouseId>,
}

/// Handler for user creation. Email uniqueness is pre-checked here and
/// backed by the storage constraint.
pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, DomainError> {
        let email = cmd.email.trim().to_lowercase();
        if self.users.get_by_email(&email).await?.is_some() {
            return Err(DomainError::rule_violated(
                "A user with this email already exists",
            ));
        }

        let hashed = self.hasher.hash(&cmd.password)?;
        let user = User::new(
            UserId::new(),
            &cmd.identification,
            &cmd.name,
            &email,
            cmd.role,
            Some(hashed),
            cmd.warehouse_ids,
            Timestamp::now(),
        )?;
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id(), role = %user.role(), "user created");
        Ok(user)
    }
}
