//! PostgreSQL implementation of UnitRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error, translate_conflict};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UnitId};
use crate::domain::unit::MeasurementUnit;
use crate::ports::UnitRepository;

/// PostgreSQL implementation of UnitRepository.
#[derive(Clone)]
pub struct PostgresUnitRepository {
    pool: PgPool,
}

impl PostgresUnitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT id, name, abbreviation, is_active, created_at, updated_at
    FROM measurement_units
"#;

const CONFLICT: &str = "A measurement unit with this name or abbreviation already exists";

#[async_trait]
impl UnitRepository for PostgresUnitRepository {
    async fn get_by_id(&self, id: &UnitId) -> Result<Option<MeasurementUnit>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch measurement unit"))?;

        row.map(row_to_unit).transpose()
    }

    async fn get_by_ids(&self, ids: &[UnitId]) -> Result<Vec<MeasurementUnit>, DomainError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!("{} WHERE id = ANY($1)", SELECT))
            .bind(&uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch measurement units by ids"))?;

        rows.into_iter().map(row_to_unit).collect()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<MeasurementUnit>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE name = $1", SELECT))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch measurement unit by name"))?;

        row.map(row_to_unit).transpose()
    }

    async fn get_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<MeasurementUnit>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE abbreviation = $1", SELECT))
            .bind(abbreviation)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch measurement unit by abbreviation"))?;

        row.map(row_to_unit).transpose()
    }

    async fn list_active(&self) -> Result<Vec<MeasurementUnit>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE is_active ORDER BY name ASC", SELECT))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch active measurement units"))?;

        rows.into_iter().map(row_to_unit).collect()
    }

    async fn save(&self, unit: &MeasurementUnit) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO measurement_units (
                id, name, abbreviation, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(unit.id().as_uuid())
        .bind(unit.name())
        .bind(unit.abbreviation())
        .bind(unit.is_active())
        .bind(unit.created_at().as_datetime())
        .bind(unit.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| translate_conflict(e, CONFLICT, "Failed to insert measurement unit"))?;

        Ok(())
    }

    async fn update(&self, unit: &MeasurementUnit) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE measurement_units SET
                name = $2,
                abbreviation = $3,
                is_active = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(unit.id().as_uuid())
        .bind(unit.name())
        .bind(unit.abbreviation())
        .bind(unit.is_active())
        .bind(unit.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| translate_conflict(e, CONFLICT, "Failed to update measurement unit"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UnitNotFound,
                format!("Measurement unit not found: {}", unit.id()),
            ));
        }

        Ok(())
    }
}

fn row_to_unit(row: PgRow) -> Result<MeasurementUnit, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let name: String = column(&row, "name")?;
    let abbreviation: String = column(&row, "abbreviation")?;
    let is_active: bool = column(&row, "is_active")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(MeasurementUnit::reconstitute(
        UnitId::from_uuid(id),
        name,
        abbreviation,
        is_active,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
