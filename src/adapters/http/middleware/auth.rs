//! Authentication middleware and extractors for axum.
//!
//! The middleware validates Bearer tokens through the `TokenService` port
//! and injects the resulting `AuthenticatedActor` into request
//! extensions; handlers pull it back out with the `RequireAuth`
//! extractor and apply role checks with [`ensure_roles`].
//!
//! ```text
//! Request -> auth_middleware -> injects AuthenticatedActor
//!                                      |
//!                              Handler -> RequireAuth(actor) + ensure_roles
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedActor, UserRole};
use crate::ports::TokenService;

/// Auth middleware state - the token verifier.
pub type AuthState = Arc<dyn TokenService>;

/// Validates the Bearer token, if present, and injects the actor.
///
/// A missing token passes through without injecting (handlers using
/// `RequireAuth` will reject); an invalid token is rejected here.
pub async fn auth_middleware(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match tokens.verify(token).await {
            Ok(actor) => {
                request.extensions_mut().insert(actor);
                next.run(request).await
            }
            Err(e) => {
                let message = match &e {
                    AuthError::TokenExpired => "Token expired",
                    _ => "Invalid token",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({
                        "code": "UNAUTHORIZED",
                        "message": message,
                    })),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated actor.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedActor);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedActor>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": "UNAUTHORIZED",
                "message": "Authentication required",
            })),
        )
            .into_response()
    }
}

/// Role guard: returns a 403 response when the actor's role is not in
/// `allowed`.
pub fn ensure_roles(actor: &AuthenticatedActor, allowed: &[UserRole]) -> Result<(), Response> {
    if actor.has_role(allowed) {
        return Ok(());
    }
    tracing::info!(
        user_id = %actor.id,
        role = %actor.role,
        "access denied by role guard"
    );
    Err((
        StatusCode::FORBIDDEN,
        Json(serde_json::json!({
            "code": "FORBIDDEN",
            "message": "You don't have permission to access this resource",
        })),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn actor(role: UserRole) -> AuthenticatedActor {
        AuthenticatedActor::new(UserId::new(), role, vec![])
    }

    #[test]
    fn ensure_roles_allows_listed_roles() {
        assert!(ensure_roles(&actor(UserRole::Admin), &[UserRole::Admin]).is_ok());
        assert!(ensure_roles(
            &actor(UserRole::WarehouseManager),
            &[UserRole::Admin, UserRole::WarehouseManager]
        )
        .is_ok());
    }

    #[test]
    fn ensure_roles_rejects_other_roles() {
        assert!(ensure_roles(&actor(UserRole::ProcessLeader), &[UserRole::Admin]).is_err());
    }
}
