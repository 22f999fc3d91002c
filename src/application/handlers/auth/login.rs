//! LoginHandler - email/password login issuing a bearer token.
//!
//! Unknown email, missing credential, and wrong password all collapse
//! into the same "Invalid credentials" rejection so the response never
//! leaks which part failed.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedActor, DomainError, Timestamp};
use crate::domain::user::User;
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Command to authenticate a user.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Handler for login.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        let email = cmd.email.trim().to_lowercase();
        let user = self.users.get_by_email(&email).await?;

        let user = match user {
            Some(user) => user,
            None => return Err(invalid_credentials()),
        };
        let hash = match user.hashed_password() {
            Some(hash) => hash.to_string(),
            None => return Err(invalid_credentials()),
        };
        if !self.hasher.verify(&cmd.password, &hash) {
            return Err(invalid_credentials());
        }

        let actor = AuthenticatedActor::new(*user.id(), user.role(), user.warehouse_ids().to_vec());
        let token = self
            .tokens
            .issue(&actor)
            .await
            .map_err(|e| DomainError::database(format!("Failed to issue token: {}", e)))?;

        let user = user.logged_in_at(Timestamp::now());
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id(), "login succeeded");
        Ok(LoginResult { token, user })
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::rule_violated("Invalid credentials")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::{test_user, MemUserRepo};
    use crate::application::handlers::users::support::FakeHasher;
    use crate::domain::foundation::{AuthError, UserRole};
    use crate::ports::PasswordHasher as _;
    use async_trait::async_trait;

    struct FakeTokens;

    #[async_trait]
    impl TokenService for FakeTokens {
        async fn issue(&self, actor: &AuthenticatedActor) -> Result<String, AuthError> {
            Ok(format!("token-for-{}", actor.id))
        }

        async fn verify(&self, _token: &str) -> Result<AuthenticatedActor, AuthError> {
            Err(AuthError::InvalidToken)
        }
    }

    fn user_with_password(password: &str) -> User {
        test_user("Ana Torres", UserRole::WarehouseManager)
            .with_password_hash(FakeHasher.hash(password).unwrap())
    }

    fn handler(repo: Arc<MemUserRepo>) -> LoginHandler {
        LoginHandler::new(repo, Arc::new(FakeHasher), Arc::new(FakeTokens))
    }

    #[tokio::test]
    async fn issues_token_and_records_login_time() {
        let user = user_with_password("s3cret");
        let email = user.email().to_string();
        let repo = Arc::new(MemUserRepo::with_users(vec![user]));
        let handler = handler(repo.clone());

        let result = handler
            .handle(LoginCommand {
                email: email.to_uppercase(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();

        assert!(result.token.starts_with("token-for-"));
        assert!(result.user.last_login().is_some());
        assert!(repo.users.lock().unwrap()[0].last_login().is_some());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let user = user_with_password("s3cret");
        let email = user.email().to_string();
        let handler = handler(Arc::new(MemUserRepo::with_users(vec![user])));

        let err = handler
            .handle(LoginCommand {
                email,
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_rule_violation());
        assert_eq!(err.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn unknown_email_is_rejected_identically() {
        let handler = handler(Arc::new(MemUserRepo::with_users(vec![])));

        let err = handler
            .handle(LoginCommand {
                email: "nobody@example.com".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
    }

    #[tokio::test]
    async fn user_without_credential_is_rejected() {
        let user = test_user("Ana Torres", UserRole::WarehouseManager);
        let email = user.email().to_string();
        let handler = handler(Arc::new(MemUserRepo::with_users(vec![user])));

        let err = handler
            .handle(LoginCommand {
                email,
                password: "s3cret".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
    }
}
