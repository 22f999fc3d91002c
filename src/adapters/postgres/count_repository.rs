//! PostgreSQL implementation of CountRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error, translate_conflict};
use crate::domain::foundation::{CountId, DomainError, ProductId, SessionId, Timestamp, UnitId};
use crate::domain::inventory::InventoryCount;
use crate::ports::CountRepository;

/// PostgreSQL implementation of CountRepository.
#[derive(Clone)]
pub struct PostgresCountRepository {
    pool: PgPool,
}

impl PostgresCountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountRepository for PostgresCountRepository {
    async fn save(&self, count: &InventoryCount) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO inventory_counts (
                id, session_id, product_id, measure_unit_id,
                quantity_packages, quantity_units, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(count.id().as_uuid())
        .bind(count.session_id().as_uuid())
        .bind(count.product_id().as_uuid())
        .bind(count.measure_unit_id().map(|u| *u.as_uuid()))
        .bind(count.quantity_packages())
        .bind(count.quantity_units())
        .bind(count.created_at().as_datetime())
        .bind(count.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            translate_conflict(
                e,
                "An inventory count already exists for this product in the session",
                "Failed to insert inventory count",
            )
        })?;

        Ok(())
    }

    async fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<InventoryCount>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, product_id, measure_unit_id,
                   quantity_packages, quantity_units, created_at, updated_at
            FROM inventory_counts
            WHERE session_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch counts by session"))?;

        rows.into_iter().map(row_to_count).collect()
    }

    async fn exists_by_session_and_product(
        &self,
        session_id: &SessionId,
        product_id: &ProductId,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM inventory_counts WHERE session_id = $1 AND product_id = $2",
        )
        .bind(session_id.as_uuid())
        .bind(product_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check count existence"))?;

        Ok(result.0 > 0)
    }

    async fn count_by_session(&self, session_id: &SessionId) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM inventory_counts WHERE session_id = $1")
                .bind(session_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to count session counts"))?;

        Ok(result.0 as u64)
    }
}

fn row_to_count(row: PgRow) -> Result<InventoryCount, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let session_id: Uuid = column(&row, "session_id")?;
    let product_id: Uuid = column(&row, "product_id")?;
    let measure_unit_id: Option<Uuid> = column(&row, "measure_unit_id")?;
    let quantity_packages: i64 = column(&row, "quantity_packages")?;
    let quantity_units: i64 = column(&row, "quantity_units")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(InventoryCount::reconstitute(
        CountId::from_uuid(id),
        SessionId::from_uuid(session_id),
        ProductId::from_uuid(product_id),
        measure_unit_id.map(UnitId::from_uuid),
        quantity_packages,
        quantity_units,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
