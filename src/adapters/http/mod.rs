//! HTTP adapters - REST API exposure of the application handlers.
//!
//! Each feature has its own module with routes, handlers, and DTOs. Role
//! checks run at this boundary; warehouse scoping and business rules run
//! inside the application handlers.

pub mod auth;
pub mod catalog;
pub mod flags;
pub mod inventory;
pub mod middleware;
pub mod units;
pub mod users;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Maps a domain error onto the wire: missing resources become 404, rule
/// and validation failures 400, auth problems 401/403, everything else
/// an opaque 500.
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = if err.code.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        match err.code {
            ErrorCode::RuleViolated | ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %err.code, message = %err.message, "request failed");
        return (
            status,
            Json(ErrorResponse {
                code: err.code.to_string(),
                message: "Internal server error".to_string(),
            }),
        )
            .into_response();
    }

    (
        status,
        Json(ErrorResponse {
            code: err.code.to_string(),
            message: err.message,
        }),
    )
        .into_response()
}

/// 400 response for malformed path/query input.
pub(crate) fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            code: "BAD_REQUEST".to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = error_response(DomainError::new(
            ErrorCode::SessionNotFound,
            "Inventory session not found",
        ));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rule_violation_maps_to_400() {
        let response = error_response(DomainError::rule_violated("cap exceeded"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response = error_response(DomainError::database("io"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
