//! User entity.
//!
//! Users authenticate with email + password and act under one of three
//! roles. Warehouse assignments scope what WAREHOUSE_MANAGER and
//! PROCESS_LEADER actors may touch; an empty assignment set means
//! unrestricted. The password credential is optional: directory-synced
//! users exist without one until an admin sets it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, UserId, UserRole, WarehouseId};

/// An operator of the counting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    identification: String,
    name: String,
    email: String,
    role: UserRole,
    hashed_password: Option<String>,
    warehouse_ids: Vec<WarehouseId>,
    is_active: bool,
    last_login: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Create a new active user.
    ///
    /// Trims identification and name, lowercases the email.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if identification, name, or email is empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        identification: &str,
        name: &str,
        email: &str,
        role: UserRole,
        hashed_password: Option<String>,
        warehouse_ids: Vec<WarehouseId>,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let identification = identification.trim();
        if identification.is_empty() {
            return Err(DomainError::validation("identification", "is required"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "is required"));
        }
        let email = normalize_email(email)?;
        Ok(Self {
            id,
            identification: identification.to_string(),
            name: name.to_string(),
            email,
            role,
            hashed_password,
            warehouse_ids,
            is_active: true,
            last_login: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a user from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        identification: String,
        name: String,
        email: String,
        role: UserRole,
        hashed_password: Option<String>,
        warehouse_ids: Vec<WarehouseId>,
        is_active: bool,
        last_login: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            identification,
            name,
            email,
            role,
            hashed_password,
            warehouse_ids,
            is_active,
            last_login,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn hashed_password(&self) -> Option<&str> {
        self.hashed_password.as_deref()
    }

    pub fn warehouse_ids(&self) -> &[WarehouseId] {
        &self.warehouse_ids
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn last_login(&self) -> Option<&Timestamp> {
        self.last_login.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Snapshot updates - each returns a new record, never mutates in place
    // ─────────────────────────────────────────────────────────────────────

    /// Snapshot with a new identification.
    pub fn with_identification(mut self, identification: &str) -> Self {
        self.identification = identification.trim().to_string();
        self
    }

    /// Snapshot with a new display name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.trim().to_string();
        self
    }

    /// Snapshot with a new (normalized) email.
    pub fn with_email(mut self, email: &str) -> Result<Self, DomainError> {
        self.email = normalize_email(email)?;
        Ok(self)
    }

    /// Snapshot with a new role.
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Snapshot with a new password hash.
    pub fn with_password_hash(mut self, hashed_password: String) -> Self {
        self.hashed_password = Some(hashed_password);
        self
    }

    /// Snapshot with a new warehouse assignment set.
    pub fn with_warehouses(mut self, warehouse_ids: Vec<WarehouseId>) -> Self {
        self.warehouse_ids = warehouse_ids;
        self
    }

    /// Snapshot with a new active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Snapshot recording a successful login.
    pub fn logged_in_at(mut self, now: Timestamp) -> Self {
        self.last_login = Some(now);
        self
    }

    /// Snapshot with a refreshed update timestamp.
    pub fn touched(mut self, now: Timestamp) -> Self {
        self.updated_at = now;
        self
    }
}

fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(DomainError::validation("email", "is required"));
    }
    Ok(email)
}
