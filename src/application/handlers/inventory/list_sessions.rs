//! ListSessionsHandler - denormalized session listing for the admin and
//! warehouse views.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, Period, SessionId, Timestamp, UserId, UserRole, WarehouseId,
};
use crate::domain::inventory::warehouse_accessible;
use crate::ports::{
    CountRepository, SessionFilter, SessionRepository, SessionStatusFilter, UserRepository,
    WarehouseRepository,
};

/// Query for the session listing.
#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub warehouse_id: Option<WarehouseId>,
    pub period: Option<Period>,
    pub status: Option<SessionStatusFilter>,
    pub actor_role: UserRole,
    pub actor_warehouse_ids: Vec<WarehouseId>,
}

/// One denormalized row of the session listing.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub id: SessionId,
    pub warehouse_id: WarehouseId,
    pub warehouse_description: String,
    pub period: Period,
    pub count_number: i32,
    pub created_by_id: UserId,
    pub created_by_name: String,
    pub created_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub products_count: u64,
}

/// Handler composing sessions with warehouse, creator, and count data.
///
/// Warehouse descriptions and creator names are batch-resolved by ID set;
/// resolving them singly must not change the output, only the lookup
/// count.
pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
    counts: Arc<dyn CountRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListSessionsHandler {
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

    pub async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<Vec<SessionSummary>, DomainError> {
        let filter = SessionFilter {
            warehouse_id: query.warehouse_id,
            period: query.period,
            status: query.status,
        };
        let mut sessions = self.sessions.list_filtered(&filter).await?;

        // Actor scoping: non-admins only see warehouses they're assigned to
        sessions.retain(|s| {
            warehouse_accessible(query.actor_role, &query.actor_warehouse_ids, s.warehouse_id())
        });

        let warehouse_ids = dedup(sessions.iter().map(|s| *s.warehouse_id()));
        let warehouse_names: HashMap<WarehouseId, String> = self
            .warehouses
            .list_by_ids(&warehouse_ids)
            .await?
            .into_iter()
            .map(|w| (*w.id(), w.description().to_string()))
            .collect();

        let creator_ids = dedup(sessions.iter().map(|s| *s.created_by()));
        let creator_names: HashMap<UserId, String> = self
            .users
            .get_by_ids(&creator_ids)
            .await?
            .into_iter()
            .map(|u| (*u.id(), u.name().to_string()))
            .collect();

        let mut summaries = Vec::with_capacity(sessions.len());
        for session in sessions {
            let products_count = self.counts.count_by_session(session.id()).await?;
            summaries.push(SessionSummary {
                id: *session.id(),
                warehouse_id: *session.warehouse_id(),
                warehouse_description: warehouse_names
                    .get(session.warehouse_id())
                    .cloned()
                    .unwrap_or_default(),
                period: session.period(),
                count_number: session.count_number(),
                created_by_id: *session.created_by(),
                created_by_name: creator_names
                    .get(session.created_by())
                    .cloned()
                    .unwrap_or_default(),
                created_at: *session.created_at(),
                closed_at: session.closed_at().copied(),
                products_count,
            });
        }
        Ok(summaries)
    }
}

fn dedup<I, T>(ids: I) -> Vec<T>
where
    I: Iterator<Item = T>,
    T: Ord + Copy,
{
    let mut ids: Vec<T> = ids.collect();
    ids.sort();
    ids.dedup();
    ids
}
