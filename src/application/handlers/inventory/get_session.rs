//! GetSessionHandler - one session's summary row.

use std::sync::Arc;

use super::SessionSummary;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserRole, WarehouseId};
use crate::domain::inventory::warehouse_accessible;
use crate::ports::{CountRepository, SessionRepository, UserRepository, WarehouseRepository};

/// Query for a single session.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
    pub actor_role: UserRole,
    pub actor_warehouse_ids: Vec<WarehouseId>,
}

/// Handler for the session detail view.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
    counts: Arc<dyn CountRepository>,
    users: Arc<dyn UserRepository>,
}

impl GetSessionHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        counts: Arc<dyn CountRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            sessions,
            warehouses,
            counts,
            users,
        }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionSummary, DomainError> {
        let session = self
            .sessions
            .get_by_id(&query.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Inventory session not found")
            })?;

        if !warehouse_accessible(
            query.actor_role,
            &query.actor_warehouse_ids,
            session.warehouse_id(),
        ) {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "You don't have access to this warehouse",
            ));
        }

        let warehouse = self.warehouses.get_by_id(session.warehouse_id()).await?;
        let creator = self.users.get_by_id(session.created_by()).await?;
        let products_count = self.counts.count_by_session(session.id()).await?;

        Ok(SessionSummary {
            id: *session.id(),
            warehouse_id: *session.warehouse_id(),
            warehouse_description: warehouse
                .map(|w| w.description().to_string())
                .unwrap_or_default(),
            period: session.period(),
            count_number: session.count_number(),
            created_by_id: *session.created_by(),
            created_by_name: creator.map(|u| u.name().to_string()).unwrap_or_default(),
            created_at: *session.created_at(),
            closed_at: session.closed_at().copied(),
            products_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::{
        test_user, test_warehouse, MemCountRepo, MemSessionRepo, MemUserRepo, MemWarehouseRepo,
    };
    use crate::domain::foundation::{Period, Timestamp};
    use crate::domain::inventory::InventorySession;

    fn fixture() -> (GetSessionHandler, SessionId, WarehouseId) {
        let warehouse = test_warehouse("North yard");
        let warehouse_id = *warehouse.id();
        let creator = test_user("Luis Vega", UserRole::WarehouseManager);
        let session = InventorySession::new(
            SessionId::new(),
            warehouse_id,
            Period::from_year_month(2025, 2).unwrap(),
            2,
            *creator.id(),
            Timestamp::now(),
        );
        let session_id = *session.id();
        let handler = GetSessionHandler::new(
            Arc::new(MemSessionRepo::with_sessions(vec![session])),
            Arc::new(MemWarehouseRepo::with_warehouses(vec![warehouse])),
            Arc::new(MemCountRepo::new()),
            Arc::new(MemUserRepo::with_users(vec![creator])),
        );
        (handler, session_id, warehouse_id)
    }

    #[tokio::test]
    async fn returns_summary_for_admin() {
        let (handler, session_id, _) = fixture();

        let summary = handler
            .handle(GetSessionQuery {
                session_id,
                actor_role: UserRole::Admin,
                actor_warehouse_ids: vec![],
            })
            .await
            .unwrap();

        assert_eq!(summary.warehouse_description, "North yard");
        assert_eq!(summary.created_by_name, "Luis Vega");
        assert_eq!(summary.count_number, 2);
    }

    #[tokio::test]
    async fn scoped_actor_outside_warehouse_is_forbidden() {
        let (handler, session_id, _) = fixture();

        let err = handler
            .handle(GetSessionQuery {
                session_id,
                actor_role: UserRole::ProcessLeader,
                actor_warehouse_ids: vec![WarehouseId::new()],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let (handler, _, _) = fixture();

        let err = handler
            .handle(GetSessionQuery {
                session_id: SessionId::new(),
                actor_role: UserRole::Admin,
                actor_warehouse_ids: vec![],
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
