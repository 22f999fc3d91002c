//! Authentication configuration.

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

const DEFAULT_SECRET: &str = "change-me-in-production";

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens.
    #[serde(default = "default_secret")]
    pub jwt_secret: String,

    /// Token lifetime in minutes.
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_minutes: i64,
}

impl AuthConfig {
    /// Validate authentication configuration.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.token_lifetime_minutes <= 0 {
            return Err(ValidationError::InvalidTokenLifetime);
        }
        if *environment == Environment::Production && self.jwt_secret == DEFAULT_SECRET {
            return Err(ValidationError::DefaultSecretInProduction);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_secret(),
            token_lifetime_minutes: default_token_lifetime(),
        }
    }
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_token_lifetime() -> i64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_is_fine_in_development() {
        assert!(AuthConfig::default().validate(&Environment::Development).is_ok());
    }

    #[test]
    fn default_secret_is_rejected_in_production() {
        assert!(AuthConfig::default().validate(&Environment::Production).is_err());
    }

    #[test]
    fn zero_lifetime_is_rejected() {
        let config = AuthConfig {
            token_lifetime_minutes: 0,
            ..AuthConfig::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
