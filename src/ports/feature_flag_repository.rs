//! Feature flag repository port.
//!
//! Flags are a small keyed on/off store; rule handlers read them through
//! [`FeatureFlagRepository::is_enabled`] rather than any process-wide
//! mutable state, so a toggle takes effect on the next request.

use async_trait::async_trait;

use crate::domain::flag::FeatureFlag;
use crate::domain::foundation::{DomainError, FlagId};

/// Repository port for feature flags.
#[async_trait]
pub trait FeatureFlagRepository: Send + Sync {
    /// Find a flag by key. Returns `None` if not found.
    async fn get_by_key(&self, key: &str) -> Result<Option<FeatureFlag>, DomainError>;

    /// Find a flag by its ID. Returns `None` if not found.
    async fn get_by_id(&self, id: &FlagId) -> Result<Option<FeatureFlag>, DomainError>;

    /// All flags, for the admin listing.
    async fn list_all(&self) -> Result<Vec<FeatureFlag>, DomainError>;

    /// Persist a new flag.
    ///
    /// # Errors
    ///
    /// - `RuleViolated` when the key constraint rejects the insert
    async fn save(&self, flag: &FeatureFlag) -> Result<(), DomainError>;

    /// Replace an existing flag snapshot.
    ///
    /// # Errors
    ///
    /// - `FlagNotFound` if the flag doesn't exist
    async fn update(&self, flag: &FeatureFlag) -> Result<(), DomainError>;

    /// Gate check: true when a flag with `key` exists and is enabled.
    async fn is_enabled(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self
            .get_by_key(key)
            .await?
            .map(|flag| flag.enabled())
            .unwrap_or(false))
    }
}
