//! ListFlagsHandler - all feature flags for the admin dashboard.

use std::sync::Arc;

use crate::domain::flag::FeatureFlag;
use crate::domain::foundation::DomainError;
use crate::ports::FeatureFlagRepository;

pub struct ListFlagsHandler {
    flags: Arc<dyn FeatureFlagRepository>,
}

impl ListFlagsHandler {
    pub fn new(flags: Arc<dyn FeatureFlagRepository>) -> Self {
        Self { flags }
    }

    pub async fn handle(&self) -> Result<Vec<FeatureFlag>, DomainError> {
        self.flags.list_all().await
    }
}
