//! Authentication types for the domain layer.
//!
//! These types represent an authenticated actor extracted from a verified
//! JWT. They have no provider dependencies - the token adapter populates
//! them via the `TokenService` port, so the middleware and handlers never
//! see provider-specific claims.

use thiserror::Error;

use super::{UserId, UserRole, WarehouseId};

/// Authenticated actor extracted from a validated token.
///
/// Carries exactly the claims the rule engine consumes: identity, role,
/// and the set of warehouses the actor is assigned to.
#[derive(Debug, Clone)]
pub struct AuthenticatedActor {
    /// The user identifier from the token's subject claim.
    pub id: UserId,

    /// The actor's role.
    pub role: UserRole,

    /// Warehouses this actor is assigned to. Empty means unrestricted.
    pub warehouse_ids: Vec<WarehouseId>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    pub fn new(id: UserId, role: UserRole, warehouse_ids: Vec<WarehouseId>) -> Self {
        Self {
            id,
            role,
            warehouse_ids,
        }
    }

    /// Returns true for administrators.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns true when the actor's role is one of `allowed`.
    pub fn has_role(&self, allowed: &[UserRole]) -> bool {
        allowed.contains(&self.role)
    }
}

/// Authentication errors surfaced during token verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token carries claims that do not map to a known actor shape.
    #[error("Malformed claims: {0}")]
    MalformedClaims(String),
}
