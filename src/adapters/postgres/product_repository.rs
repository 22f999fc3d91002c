//! PostgreSQL implementation of ProductRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error};
use crate::domain::foundation::{DomainError, ProductId, Timestamp, UnitId};
use crate::domain::product::Product;
use crate::ports::ProductRepository;

/// PostgreSQL implementation of ProductRepository.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT id, code, description, inventory_unit_id, packaging_unit_id,
           conversion_factor, is_active, created_at, updated_at
    FROM products
"#;

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch product"))?;

        row.map(row_to_product).transpose()
    }

    async fn list_active(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE is_active ORDER BY code ASC", SELECT))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch active products"))?;

        rows.into_iter().map(row_to_product).collect()
    }
}

fn row_to_product(row: PgRow) -> Result<Product, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let code: String = column(&row, "code")?;
    let description: String = column(&row, "description")?;
    let inventory_unit_id: Uuid = column(&row, "inventory_unit_id")?;
    let packaging_unit_id: Uuid = column(&row, "packaging_unit_id")?;
    let conversion_factor: f64 = column(&row, "conversion_factor")?;
    let is_active: bool = column(&row, "is_active")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Product::reconstitute(
        ProductId::from_uuid(id),
        code,
        description,
        UnitId::from_uuid(inventory_unit_id),
        UnitId::from_uuid(packaging_unit_id),
        conversion_factor,
        is_active,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
