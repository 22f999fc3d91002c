//! HTTP DTOs for feature flag endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::flag::FeatureFlag;

/// Request to create a feature flag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlagRequest {
    pub key: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to update a feature flag. The key is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFlagRequest {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Feature flag response body.
#[derive(Debug, Clone, Serialize)]
pub struct FlagResponse {
    pub id: String,
    pub key: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&FeatureFlag> for FlagResponse {
    fn from(flag: &FeatureFlag) -> Self {
        Self {
            id: flag.id().to_string(),
            key: flag.key().to_string(),
            enabled: flag.enabled(),
            description: flag.description().map(|d| d.to_string()),
        }
    }
}
