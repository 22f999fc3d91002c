//! SyncUsersHandler - imports members from the corporate directory.
//!
//! Directory members arrive as raw records; each becomes an inactive-
//! credential WAREHOUSE_MANAGER user unless their email already exists.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp, UserId, UserRole};
use crate::domain::user::User;
use crate::ports::{DirectoryMember, UserDirectory, UserRepository};

/// Command to sync directory members.
#[derive(Debug, Clone)]
pub struct SyncUsersCommand {
    pub limit: u32,
}

/// Handler for the directory sync. Returns the number of users created.
pub struct SyncUsersHandler {
    users: Arc<dyn UserRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl SyncUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { users, directory }
    }

    pub async fn handle(&self, cmd: SyncUsersCommand) -> Result<u32, DomainError> {
        let members = self.directory.fetch_members(cmd.limit).await?;
        let now = Timestamp::now();
        let mut created = 0;

        for member in members {
            let Some(user) = member_to_user(&member, now) else {
                continue;
            };
            if self.users.get_by_email(user.email()).await?.is_some() {
                continue;
            }
            self.users.create(&user).await?;
            created += 1;
        }

        tracing::info!(created, "corporate directory sync finished");
        Ok(created)
    }
}

/// Maps one directory record to a user. Returns `None` when the record
/// has no usable email.
fn member_to_user(member: &DirectoryMember, now: Timestamp) -> Option<User> {
    let email = member.email.trim().to_lowercase();
    if email.is_empty() {
        return None;
    }
    let name = format!("{} {}", member.first_name, member.last_name)
        .trim()
        .to_string();
    let name = if name.is_empty() {
        "Unknown".to_string()
    } else {
        name
    };
    let id = member.id.map(UserId::from_uuid).unwrap_or_default();
    User::new(
        id,
        &synthetic_identification(),
        &name,
        &email,
        UserRole::WarehouseManager,
        None,
        vec![],
        now,
    )
    .ok()
}

/// Directory members carry no employee number; synthesize an 8-digit one.
fn synthetic_identification() -> String {
    format!("{:08}", Uuid::new_v4().as_u128() % 100_000_000)
}
