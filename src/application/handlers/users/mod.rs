//! Handlers for user administration and directory sync.

mod create_user;
mod list_users;
mod sync_users;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use list_users::{ListUsersHandler, UserListItem, WarehouseRef};
pub use sync_users::{SyncUsersCommand, SyncUsersHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};

#[cfg(test)]
pub(crate) mod support {
    use crate::domain::foundation::DomainError;
    use crate::ports::PasswordHasher;

    /// Reversible stand-in for the argon2 adapter.
    pub struct FakeHasher;

    impl PasswordHasher for FakeHasher {
        fn hash(&self, password: &str) -> Result<String, DomainError> {
            Ok(format!("hashed:{}", password))
        }

        fn verify(&self, password: &str, hash: &str) -> bool {
            hash == format!("hashed:{}", password)
        }
    }
}
