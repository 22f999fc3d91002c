//! Password hashing port.
//!
//! Keeps the hashing primitive out of the application layer; the argon2
//! adapter implements it in production and tests substitute a plain-text
//! fake.

use crate::domain::foundation::DomainError;

/// Port for hashing and verifying password credentials.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password for storage.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a plain-text password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
