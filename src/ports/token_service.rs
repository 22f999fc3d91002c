//! Token service port.
//!
//! The middleware and login handler depend on this contract, not on any
//! signing library, so the token scheme can change without touching them.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedActor};

/// Port for issuing and verifying bearer tokens.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issue a signed token carrying the actor's identity, role, and
    /// warehouse assignments.
    async fn issue(&self, actor: &AuthenticatedActor) -> Result<String, AuthError>;

    /// Verify a token and extract the actor it was issued for.
    ///
    /// # Errors
    ///
    /// - `TokenExpired` when the expiry claim has passed
    /// - `InvalidToken` on any signature or format problem
    /// - `MalformedClaims` when claims don't map to an actor
    async fn verify(&self, token: &str) -> Result<AuthenticatedActor, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn token_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn TokenService) {}
    }
}
