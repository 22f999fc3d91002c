//! PostgreSQL implementation of FeatureFlagRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error, translate_conflict};
use crate::domain::flag::FeatureFlag;
use crate::domain::foundation::{DomainError, ErrorCode, FlagId, Timestamp};
use crate::ports::FeatureFlagRepository;

/// PostgreSQL implementation of FeatureFlagRepository.
#[derive(Clone)]
pub struct PostgresFeatureFlagRepository {
    pool: PgPool,
}

impl PostgresFeatureFlagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT id, key, enabled, description, created_at, updated_at
    FROM feature_flags
"#;

#[async_trait]
impl FeatureFlagRepository for PostgresFeatureFlagRepository {
    async fn get_by_key(&self, key: &str) -> Result<Option<FeatureFlag>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE key = $1", SELECT))
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch feature flag by key"))?;

        row.map(row_to_flag).transpose()
    }

    async fn get_by_id(&self, id: &FlagId) -> Result<Option<FeatureFlag>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch feature flag"))?;

        row.map(row_to_flag).transpose()
    }

    async fn list_all(&self) -> Result<Vec<FeatureFlag>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY key ASC", SELECT))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch feature flags"))?;

        rows.into_iter().map(row_to_flag).collect()
    }

    async fn save(&self, flag: &FeatureFlag) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO feature_flags (
                id, key, enabled, description, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(flag.id().as_uuid())
        .bind(flag.key())
        .bind(flag.enabled())
        .bind(flag.description())
        .bind(flag.created_at().as_datetime())
        .bind(flag.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            translate_conflict(
                e,
                "A feature flag with this key already exists",
                "Failed to insert feature flag",
            )
        })?;

        Ok(())
    }

    async fn update(&self, flag: &FeatureFlag) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE feature_flags SET
                enabled = $2,
                description = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(flag.id().as_uuid())
        .bind(flag.enabled())
        .bind(flag.description())
        .bind(flag.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update feature flag"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::FlagNotFound,
                format!("Feature flag not found: {}", flag.id()),
            ));
        }

        Ok(())
    }
}

fn row_to_flag(row: PgRow) -> Result<FeatureFlag, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let key: String = column(&row, "key")?;
    let enabled: bool = column(&row, "enabled")?;
    let description: Option<String> = column(&row, "description")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(FeatureFlag::reconstitute(
        FlagId::from_uuid(id),
        key,
        enabled,
        description,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
