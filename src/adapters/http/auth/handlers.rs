//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};

use crate::adapters::http::error_response;
use crate::application::handlers::auth::{LoginCommand, LoginHandler};

use super::dto::{LoginRequest, LoginResponse, LoginUser};

#[derive(Clone)]
pub struct AuthHandlers {
    pub login: Arc<LoginHandler>,
}

/// POST /api/auth/login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };
    match handlers.login.handle(cmd).await {
        Ok(result) => {
            let user = LoginUser {
                id: result.user.id().to_string(),
                name: result.user.name().to_string(),
                email: result.user.email().to_string(),
                role: result.user.role().to_string(),
                warehouses: result
                    .user
                    .warehouse_ids()
                    .iter()
                    .map(|w| w.to_string())
                    .collect(),
            };
            (
                StatusCode::OK,
                Json(LoginResponse {
                    access_token: result.token,
                    token_type: "bearer",
                    user,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}
