//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository port for user persistence.
///
/// Email uniqueness is enforced by the storage layer (case-insensitively);
/// adapters translate the conflict into a rule violation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID. Returns `None` if not found.
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Batch lookup by ID set, for read-model enrichment without N+1.
    async fn get_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError>;

    /// Find a user by (lowercased) email. Returns `None` if not found.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All users, for the admin listing.
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user and its warehouse assignments.
    ///
    /// # Errors
    ///
    /// - `RuleViolated` when the email or identification constraint
    ///   rejects the insert
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Replace an existing user snapshot and its warehouse assignments.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    /// - `RuleViolated` on a uniqueness conflict
    /// - `DatabaseError` on persistence failure
    async fn update(&self, user: &User) -> Result<(), DomainError>;
}
