//! Error types for the domain layer.
//!
//! The rule engine surfaces exactly two kinds of domain failure: a missing
//! entity (`NotFound` codes) and a violated business precondition
//! (`RuleViolated`). Everything else is infrastructure. Storage-level
//! unique-constraint conflicts are translated into `RuleViolated` at the
//! repository boundary so the caller sees the same error kind whether the
//! rule was caught in application logic or by the database constraint.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Missing resources
    SessionNotFound,
    ProductNotFound,
    WarehouseNotFound,
    UnitNotFound,
    UserNotFound,
    FlagNotFound,

    // Rule engine
    RuleViolated,
    ValidationFailed,

    // Authentication / authorization
    Unauthorized,
    Forbidden,

    // Infrastructure
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Returns true for the "missing resource" family of codes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::SessionNotFound
                | ErrorCode::ProductNotFound
                | ErrorCode::WarehouseNotFound
                | ErrorCode::UnitNotFound
                | ErrorCode::UserNotFound
                | ErrorCode::FlagNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::WarehouseNotFound => "WAREHOUSE_NOT_FOUND",
            ErrorCode::UnitNotFound => "UNIT_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::FlagNotFound => "FLAG_NOT_FOUND",
            ErrorCode::RuleViolated => "RULE_VIOLATED",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with a code and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a business rule violation.
    pub fn rule_violated(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RuleViolated, message)
    }

    /// Creates a validation failure for a named field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ValidationFailed,
            format!("{}: {}", field, message.into()),
        )
    }

    /// Creates a database error wrapping an adapter failure.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Returns true when this error is in the "missing resource" family.
    pub fn is_not_found(&self) -> bool {
        self.code.is_not_found()
    }

    /// Returns true when this error is a business rule violation.
    pub fn is_rule_violation(&self) -> bool {
        self.code == ErrorCode::RuleViolated
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
