//! UpdateFlagHandler - edits a feature flag's state or description.

use std::sync::Arc;

use crate::domain::flag::FeatureFlag;
use crate::domain::foundation::{DomainError, ErrorCode, FlagId, Timestamp};
use crate::ports::FeatureFlagRepository;

/// Command to update a feature flag. The key is immutable.
#[derive(Debug, Clone)]
pub struct UpdateFlagCommand {
    pub id: FlagId,
    pub enabled: Option<bool>,
    pub description: Option<String>,
}

pub struct UpdateFlagHandler {
    flags: Arc<dyn FeatureFlagRepository>,
}

impl UpdateFlagHandler {
    pub fn new(flags: Arc<dyn FeatureFlagRepository>) -> Self {
        Self { flags }
    }

    pub async fn handle(&self, cmd: UpdateFlagCommand) -> Result<FeatureFlag, DomainError> {
        let existing = self
            .flags
            .get_by_id(&cmd.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::FlagNotFound, "Feature flag not found"))?;

        let updated = existing.updated(cmd.enabled, cmd.description, Timestamp::now());
        self.flags.update(&updated).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::MemFlags;

    #[tokio::test]
    async fn updates_enabled_state() {
        let flags = Arc::new(MemFlags::with_enabled("SOME_RULE"));
        let id = *flags.flags.lock().unwrap()[0].id();
        let handler = UpdateFlagHandler::new(flags.clone());

        let updated = handler
            .handle(UpdateFlagCommand {
                id,
                enabled: Some(false),
                description: None,
            })
            .await
            .unwrap();

        assert!(!updated.enabled());
        assert_eq!(updated.key(), "SOME_RULE");
    }

    #[tokio::test]
    async fn missing_flag_is_not_found() {
        let handler = UpdateFlagHandler::new(Arc::new(MemFlags::new()));

        let err = handler
            .handle(UpdateFlagCommand {
                id: FlagId::new(),
                enabled: Some(true),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
