//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error, translate_conflict};
use crate::domain::foundation::{
    DomainError, ErrorCode, Period, SessionId, Timestamp, UserId, WarehouseId,
};
use crate::domain::inventory::InventorySession;
use crate::ports::{SessionFilter, SessionRepository, SessionStatusFilter};

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &InventorySession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO inventory_sessions (
                id, warehouse_id, period, count_number, created_by, created_at, closed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.warehouse_id().as_uuid())
        .bind(session.period().as_datetime())
        .bind(session.count_number())
        .bind(session.created_by().as_uuid())
        .bind(session.created_at().as_datetime())
        .bind(session.closed_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            translate_conflict(
                e,
                "An inventory session with this count number already exists for the period",
                "Failed to insert inventory session",
            )
        })?;

        Ok(())
    }

    async fn update(&self, session: &InventorySession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE inventory_sessions SET
                closed_at = $2
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.closed_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update inventory session"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Inventory session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn get_by_id(&self, id: &SessionId) -> Result<Option<InventorySession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, warehouse_id, period, count_number, created_by, created_at, closed_at
            FROM inventory_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch inventory session"))?;

        row.map(row_to_session).transpose()
    }

    async fn list_by_warehouse(
        &self,
        warehouse_id: &WarehouseId,
    ) -> Result<Vec<InventorySession>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, warehouse_id, period, count_number, created_by, created_at, closed_at
            FROM inventory_sessions
            WHERE warehouse_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(warehouse_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch sessions by warehouse"))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn list_filtered(
        &self,
        filter: &SessionFilter,
    ) -> Result<Vec<InventorySession>, DomainError> {
        let status = filter.status.map(|s| match s {
            SessionStatusFilter::Open => "open",
            SessionStatusFilter::Closed => "closed",
        });
        let rows = sqlx::query(
            r#"
            SELECT id, warehouse_id, period, count_number, created_by, created_at, closed_at
            FROM inventory_sessions
            WHERE ($1::uuid IS NULL OR warehouse_id = $1)
              AND ($2::timestamptz IS NULL OR period = $2)
              AND ($3::text IS NULL
                   OR ($3 = 'open' AND closed_at IS NULL)
                   OR ($3 = 'closed' AND closed_at IS NOT NULL))
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.warehouse_id.map(|w| *w.as_uuid()))
        .bind(filter.period.map(|p| *p.as_datetime()))
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch filtered sessions"))?;

        rows.into_iter().map(row_to_session).collect()
    }
}

fn row_to_session(row: PgRow) -> Result<InventorySession, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let warehouse_id: Uuid = column(&row, "warehouse_id")?;
    let period: DateTime<Utc> = column(&row, "period")?;
    let count_number: i32 = column(&row, "count_number")?;
    let created_by: Uuid = column(&row, "created_by")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let closed_at: Option<DateTime<Utc>> = column(&row, "closed_at")?;

    Ok(InventorySession::reconstitute(
        SessionId::from_uuid(id),
        WarehouseId::from_uuid(warehouse_id),
        Period::from_datetime(period),
        count_number,
        UserId::from_uuid(created_by),
        Timestamp::from_datetime(created_at),
        closed_at.map(Timestamp::from_datetime),
    ))
}
