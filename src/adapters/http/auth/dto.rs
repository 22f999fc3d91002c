//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: LoginUser,
}

/// The authenticated user's profile, echoed on login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub warehouses: Vec<String>,
}
