//! ToggleFlagHandler - flips a feature flag.

use std::sync::Arc;

use crate::domain::flag::FeatureFlag;
use crate::domain::foundation::{DomainError, ErrorCode, FlagId, Timestamp};
use crate::ports::FeatureFlagRepository;

/// Command to toggle a feature flag.
#[derive(Debug, Clone)]
pub struct ToggleFlagCommand {
    pub id: FlagId,
}

pub struct ToggleFlagHandler {
    flags: Arc<dyn FeatureFlagRepository>,
}

impl ToggleFlagHandler {
    pub fn new(flags: Arc<dyn FeatureFlagRepository>) -> Self {
        Self { flags }
    }

    pub async fn handle(&self, cmd: ToggleFlagCommand) -> Result<FeatureFlag, DomainError> {
        let existing = self
            .flags
            .get_by_id(&cmd.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::FlagNotFound, "Feature flag not found"))?;

        let toggled = existing.toggled(Timestamp::now());
        self.flags.update(&toggled).await?;

        tracing::info!(key = toggled.key(), enabled = toggled.enabled(), "feature flag toggled");
        Ok(toggled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::MemFlags;

    #[tokio::test]
    async fn toggles_enabled_state() {
        let flags = Arc::new(MemFlags::with_enabled("SOME_RULE"));
        let id = *flags.flags.lock().unwrap()[0].id();
        let handler = ToggleFlagHandler::new(flags.clone());

        let toggled = handler.handle(ToggleFlagCommand { id }).await.unwrap();
        assert!(!toggled.enabled());
        assert!(!flags.flags.lock().unwrap()[0].enabled());
    }

    #[tokio::test]
    async fn missing_flag_is_not_found() {
        let handler = ToggleFlagHandler::new(Arc::new(MemFlags::new()));

        let err = handler
            .handle(ToggleFlagCommand { id: FlagId::new() })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
