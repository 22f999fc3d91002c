//! CloseSessionHandler - closes an open inventory session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::inventory::InventorySession;
use crate::ports::SessionRepository;

/// Command to close an inventory session.
#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: SessionId,
}

/// Handler for closing sessions. Closing twice is an error, not a no-op.
pub struct CloseSessionHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl CloseSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: CloseSessionCommand) -> Result<InventorySession, DomainError> {
        let session = self
            .sessions
            .get_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Inventory session not found")
            })?;

        let closed = session.closed(Timestamp::now())?;
        self.sessions.update(&closed).await?;

        tracing::info!(session_id = %closed.id(), "inventory session closed");
        Ok(closed)
    }
}
