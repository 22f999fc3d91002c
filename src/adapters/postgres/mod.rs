//! PostgreSQL adapters implementing the repository ports.
//!
//! Each adapter wraps a `PgPool` and maps rows to domain snapshots via
//! `reconstitute`. Unique-constraint violations are translated into rule
//! violations here: per the concurrency model, the database constraint is
//! the final guard behind every application-level pre-check, so its
//! rejection must surface as the same domain error kind.

mod count_repository;
mod feature_flag_repository;
mod product_repository;
mod session_repository;
mod unit_repository;
mod user_repository;
mod warehouse_repository;

pub use count_repository::PostgresCountRepository;
pub use feature_flag_repository::PostgresFeatureFlagRepository;
pub use product_repository::PostgresProductRepository;
pub use session_repository::PostgresSessionRepository;
pub use unit_repository::PostgresUnitRepository;
pub use user_repository::PostgresUserRepository;
pub use warehouse_repository::PostgresWarehouseRepository;

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::DomainError;

/// Postgres error code for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Translates an insert/update failure: a unique-constraint conflict
/// becomes a rule violation with `conflict_message`, anything else a
/// database error.
pub(crate) fn translate_conflict(
    e: sqlx::Error,
    conflict_message: &str,
    context: &str,
) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::rule_violated(conflict_message);
        }
    }
    DomainError::database(format!("{}: {}", context, e))
}

/// Wraps a plain query failure into a database error.
pub(crate) fn db_error(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

/// Reads one column from a row, wrapping decode failures.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to read column '{}': {}", name, e)))
}
