//! FeatureFlag entity.
//!
//! A keyed on/off toggle read through a port, letting rule behavior change
//! without a deploy. The only seeded flag gates the session-creation
//! window; see [`crate::domain::inventory::RESTRICT_CREATION_WINDOW_FLAG`].

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, FlagId, Timestamp};

/// A named boolean toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    id: FlagId,
    key: String,
    enabled: bool,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl FeatureFlag {
    /// Create a new flag. The key is trimmed and must be non-empty.
    pub fn new(
        id: FlagId,
        key: &str,
        enabled: bool,
        description: Option<String>,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::validation("key", "is required"));
        }
        Ok(Self {
            id,
            key: key.to_string(),
            enabled,
            description: description.map(|d| d.trim().to_string()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a flag from persistence.
    pub fn reconstitute(
        id: FlagId,
        key: String,
        enabled: bool,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            key,
            enabled,
            description,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &FlagId {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Snapshot with new enabled state and/or description. The key is
    /// immutable once created.
    pub fn updated(
        &self,
        enabled: Option<bool>,
        description: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: self.id,
            key: self.key.clone(),
            enabled: enabled.unwrap_or(self.enabled),
            description: match description {
                Some(d) => Some(d.trim().to_string()),
                None => self.description.clone(),
            },
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Snapshot with the enabled state flipped.
    pub fn toggled(&self, now: Timestamp) -> Self {
        Self {
            id: self.id,
            key: self.key.clone(),
            enabled: !self.enabled,
            description: self.description.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}
