//! PostgreSQL implementation of WarehouseRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, Timestamp, WarehouseId, WarehouseStatus};
use crate::domain::warehouse::Warehouse;
use crate::ports::WarehouseRepository;

/// PostgreSQL implementation of WarehouseRepository.
#[derive(Clone)]
pub struct PostgresWarehouseRepository {
    pool: PgPool,
}

impl PostgresWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT id, code, description, is_active, status, status_description,
           created_at, updated_at
    FROM warehouses
"#;

#[async_trait]
impl WarehouseRepository for PostgresWarehouseRepository {
    async fn get_by_id(&self, id: &WarehouseId) -> Result<Option<Warehouse>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch warehouse"))?;

        row.map(row_to_warehouse).transpose()
    }

    async fn list_active(&self) -> Result<Vec<Warehouse>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE is_active ORDER BY code ASC", SELECT))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch active warehouses"))?;

        rows.into_iter().map(row_to_warehouse).collect()
    }

    async fn list_by_ids(&self, ids: &[WarehouseId]) -> Result<Vec<Warehouse>, DomainError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!("{} WHERE id = ANY($1)", SELECT))
            .bind(&uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch warehouses by ids"))?;

        rows.into_iter().map(row_to_warehouse).collect()
    }
}

fn row_to_warehouse(row: PgRow) -> Result<Warehouse, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let code: String = column(&row, "code")?;
    let description: String = column(&row, "description")?;
    let is_active: bool = column(&row, "is_active")?;
    let status: String = column(&row, "status")?;
    let status_description: Option<String> = column(&row, "status_description")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Warehouse::reconstitute(
        WarehouseId::from_uuid(id),
        code,
        description,
        is_active,
        status.parse::<WarehouseStatus>()?,
        status_description,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
