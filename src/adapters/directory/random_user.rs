//! Random User API implementation of the UserDirectory port.
//!
//! Stand-in for the real corporate directory: randomuser.me returns
//! realistic member records in a fixed JSON shape.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::ports::{DirectoryMember, UserDirectory};

const DEFAULT_BASE_URL: &str = "https://randomuser.me/api";

/// HTTP client for the Random User API.
pub struct RandomUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl RandomUserDirectory {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Override the endpoint (tests point this at a local server).
    pub fn with_base_url(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client construction cannot fail with static config");
        Self { client, base_url }
    }
}

impl Default for RandomUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for RandomUserDirectory {
    async fn fetch_members(&self, limit: u32) -> Result<Vec<DirectoryMember>, DomainError> {
        let url = format!("{}/?results={}", self.base_url, limit);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::database(format!("Directory request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| DomainError::database(format!("Directory returned an error: {}", e)))?;

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Directory response unreadable: {}", e)))?;

        Ok(body.results.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<RawMember>,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    #[serde(default)]
    name: RawName,
    #[serde(default)]
    email: String,
    #[serde(default)]
    login: RawLogin,
}

#[derive(Debug, Default, Deserialize)]
struct RawName {
    #[serde(default)]
    first: String,
    #[serde(default)]
    last: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawLogin {
    #[serde(default)]
    uuid: String,
}

impl From<RawMember> for DirectoryMember {
    fn from(raw: RawMember) -> Self {
        DirectoryMember {
            id: Uuid::parse_str(&raw.login.uuid).ok(),
            first_name: raw.name.first,
            last_name: raw.name.last,
            email: raw.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_member_maps_to_directory_member() {
        let raw: RawMember = serde_json::from_str(
            r#"{
                "name": {"first": "Maria", "last": "Lopez"},
                "email": "maria.lopez@example.com",
                "login": {"uuid": "8d4f5e4e-9f3a-4b61-8f0e-2f6e7a1b2c3d"}
            }"#,
        )
        .unwrap();

        let member: DirectoryMember = raw.into();
        assert_eq!(member.first_name, "Maria");
        assert_eq!(member.email, "maria.lopez@example.com");
        assert!(member.id.is_some());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let raw: RawMember = serde_json::from_str("{}").unwrap();
        let member: DirectoryMember = raw.into();
        assert!(member.id.is_none());
        assert_eq!(member.email, "");
    }
}
