//! PostgreSQL implementation of UserRepository.
//!
//! Warehouse assignments live in the `user_warehouses` join table and are
//! aggregated into each fetched row, so a user always arrives with its
//! full assignment set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, db_error, translate_conflict};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, UserRole, WarehouseId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT: &str = r#"
    SELECT u.id, u.identification, u.name, u.email, u.role, u.hashed_password,
           u.is_active, u.last_login, u.created_at, u.updated_at,
           COALESCE(array_agg(uw.warehouse_id) FILTER (WHERE uw.warehouse_id IS NOT NULL), '{}')
               AS warehouse_ids
    FROM users u
    LEFT JOIN user_warehouses uw ON uw.user_id = u.id
"#;

const GROUP: &str = r#"
    GROUP BY u.id, u.identification, u.name, u.email, u.role, u.hashed_password,
             u.is_active, u.last_login, u.created_at, u.updated_at
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE u.id = $1 {}", SELECT, GROUP))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch user"))?;

        row.map(row_to_user).transpose()
    }

    async fn get_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query(&format!("{} WHERE u.id = ANY($1) {}", SELECT, GROUP))
            .bind(&uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch users by ids"))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "{} WHERE lower(u.email) = lower($1) {}",
            SELECT, GROUP
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch user by email"))?;

        row.map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!("{} {} ORDER BY u.name ASC", SELECT, GROUP))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to fetch users"))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to open transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO users (
                id, identification, name, email, role, hashed_password,
                is_active, last_login, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.identification())
        .bind(user.name())
        .bind(user.email())
        .bind(user.role().as_str())
        .bind(user.hashed_password())
        .bind(user.is_active())
        .bind(user.last_login().map(|t| *t.as_datetime()))
        .bind(user.created_at().as_datetime())
        .bind(user.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            translate_conflict(
                e,
                "A user with this email or identification already exists",
                "Failed to insert user",
            )
        })?;

        insert_assignments(&mut tx, user).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit user insert"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to open transaction"))?;

        let result = sqlx::query(
            r#"
            UPDATE users SET
                identification = $2,
                name = $3,
                email = $4,
                role = $5,
                hashed_password = $6,
                is_active = $7,
                last_login = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.identification())
        .bind(user.name())
        .bind(user.email())
        .bind(user.role().as_str())
        .bind(user.hashed_password())
        .bind(user.is_active())
        .bind(user.last_login().map(|t| *t.as_datetime()))
        .bind(user.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            translate_conflict(
                e,
                "A user with this email or identification already exists",
                "Failed to update user",
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id()),
            ));
        }

        sqlx::query("DELETE FROM user_warehouses WHERE user_id = $1")
            .bind(user.id().as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear warehouse assignments"))?;
        insert_assignments(&mut tx, user).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit user update"))?;
        Ok(())
    }
}

async fn insert_assignments(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    user: &User,
) -> Result<(), DomainError> {
    for warehouse_id in user.warehouse_ids() {
        sqlx::query("INSERT INTO user_warehouses (user_id, warehouse_id) VALUES ($1, $2)")
            .bind(user.id().as_uuid())
            .bind(warehouse_id.as_uuid())
            .execute(&mut **tx)
            .await
            .map_err(db_error("Failed to insert warehouse assignment"))?;
    }
    Ok(())
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let identification: String = column(&row, "identification")?;
    let name: String = column(&row, "name")?;
    let email: String = column(&row, "email")?;
    let role: String = column(&row, "role")?;
    let hashed_password: Option<String> = column(&row, "hashed_password")?;
    let is_active: bool = column(&row, "is_active")?;
    let last_login: Option<DateTime<Utc>> = column(&row, "last_login")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;
    let warehouse_ids: Vec<Uuid> = column(&row, "warehouse_ids")?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        identification,
        name,
        email,
        role.parse::<UserRole>()?,
        hashed_password,
        warehouse_ids.into_iter().map(WarehouseId::from_uuid).collect(),
        is_active,
        last_login.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
