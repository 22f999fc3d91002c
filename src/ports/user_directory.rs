//! Corporate user directory port.
//!
//! The directory is an external HTTP collaborator; the sync handler only
//! sees raw member records through this contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::DomainError;

/// A raw member record as returned by the corporate directory.
#[derive(Debug, Clone)]
pub struct DirectoryMember {
    /// Stable directory identifier, when the directory provides one.
    pub id: Option<Uuid>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Port for fetching members from the corporate user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch up to `limit` member records.
    async fn fetch_members(&self, limit: u32) -> Result<Vec<DirectoryMember>, DomainError>;
}
