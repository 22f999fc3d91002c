//! CreateSessionHandler - opens a new inventory session for a warehouse.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, Period, SessionId, Timestamp, UserId, UserRole, WarehouseId,
};
use crate::domain::inventory::{
    creation_window_allows, next_count_number, warehouse_accessible, InventorySession,
    RESTRICT_CREATION_WINDOW_FLAG,
};
use crate::ports::{FeatureFlagRepository, SessionRepository};

/// Command to create a new inventory session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub warehouse_id: WarehouseId,
    pub period: Period,
    pub created_by: UserId,
    pub creator_role: UserRole,
    pub creator_warehouse_ids: Vec<WarehouseId>,
    /// Today's date, injected by the boundary so the window rule is
    /// deterministic under test.
    pub today: Timestamp,
}

/// Handler for creating inventory sessions.
///
/// The warehouse-membership check lives here, not only at the transport
/// layer, so direct invocation cannot bypass it. The storage constraint
/// on (warehouse, period, count_number) remains the final guard against
/// concurrent creation.
pub struct CreateSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    flags: Arc<dyn FeatureFlagRepository>,
}

impl CreateSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, flags: Arc<dyn FeatureFlagRepository>) -> Self {
        Self { sessions, flags }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<InventorySession, DomainError> {
        // 1. Flag-gated creation window: days 1-3 of the month
        if self.flags.is_enabled(RESTRICT_CREATION_WINDOW_FLAG).await?
            && !creation_window_allows(&cmd.today)
        {
            return Err(DomainError::rule_violated(
                "Inventory sessions can only be created during the first 3 days of the month",
            ));
        }

        // 2. Warehouse scoping (admins are unrestricted)
        if !warehouse_accessible(
            cmd.creator_role,
            &cmd.creator_warehouse_ids,
            &cmd.warehouse_id,
        ) {
            return Err(DomainError::rule_violated(
                "You are not assigned to this warehouse",
            ));
        }

        // 3. Cap and numbering within the normalized period
        let existing = self.sessions.list_by_warehouse(&cmd.warehouse_id).await?;
        let in_period: Vec<&InventorySession> = existing
            .iter()
            .filter(|s| s.period() == cmd.period)
            .collect();
        let count_number = next_count_number(&in_period)?;

        let session = InventorySession::new(
            SessionId::new(),
            cmd.warehouse_id,
            cmd.period,
            count_number,
            cmd.created_by,
            Timestamp::now(),
        );
        self.sessions.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            warehouse_id = %session.warehouse_id(),
            period = %session.period(),
            count_number = session.count_number(),
            "inventory session created"
        );
        Ok(session)
    }
}
