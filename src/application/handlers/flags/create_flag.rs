//! CreateFlagHandler - registers a new feature flag.

use std::sync::Arc;

use crate::domain::flag::FeatureFlag;
use crate::domain::foundation::{DomainError, FlagId, Timestamp};
use crate::ports::FeatureFlagRepository;

/// Command to create a feature flag.
#[derive(Debug, Clone)]
pub struct CreateFlagCommand {
    pub key: String,
    pub enabled: bool,
    pub description: Option<String>,
}

pub struct CreateFlagHandler {
    flags: Arc<dyn FeatureFlagRepository>,
}

impl CreateFlagHandler {
    pub fn new(flags: Arc<dyn FeatureFlagRepository>) -> Self {
        Self { flags }
    }

    pub async fn handle(&self, cmd: CreateFlagCommand) -> Result<FeatureFlag, DomainError> {
        let flag = FeatureFlag::new(
            FlagId::new(),
            &cmd.key,
            cmd.enabled,
            cmd.description,
            Timestamp::now(),
        )?;

        if self.flags.get_by_key(flag.key()).await?.is_some() {
            return Err(DomainError::rule_violated(
                "A feature flag with this key already exists",
            ));
        }

        self.flags.save(&flag).await?;
        Ok(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::MemFlags;

    #[tokio::test]
    async fn creates_flag_with_trimmed_key() {
        let handler = CreateFlagHandler::new(Arc::new(MemFlags::new()));

        let flag = handler
            .handle(CreateFlagCommand {
                key: " SOME_RULE ".to_string(),
                enabled: false,
                description: Some("gate".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(flag.key(), "SOME_RULE");
        assert!(!flag.enabled());
    }

    #[tokio::test]
    async fn duplicate_key_is_rejected() {
        let handler = CreateFlagHandler::new(Arc::new(MemFlags::with_enabled("SOME_RULE")));

        let err = handler
            .handle(CreateFlagCommand {
                key: "SOME_RULE".to_string(),
                enabled: true,
                description: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_rule_violation());
    }
}
