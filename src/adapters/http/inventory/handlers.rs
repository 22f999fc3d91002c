//! HTTP handlers for inventory session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::{ensure_roles, RequireAuth};
use crate::adapters::http::{bad_request, error_response};
use crate::application::handlers::inventory::{
    AddProductsCommand, AddProductsHandler, CloseSessionCommand, CloseSessionHandler,
    CreateSessionCommand, CreateSessionHandler, GetSessionHandler, GetSessionQuery,
    ListCountsHandler, ListCountsQuery, ListSessionProductsHandler, ListSessionProductsQuery,
    ListSessionsHandler, ListSessionsQuery, RegisterCountCommand, RegisterCountHandler,
};
use crate::domain::foundation::{AuthenticatedActor, Period, SessionId, Timestamp, UserRole};

use super::dto::{
    AddSessionProductsRequest, AddSessionProductsResponse, CountResponse, CreateCountRequest,
    CreateSessionRequest, ListSessionsParams, SessionProductResponse, SessionResponse,
    SessionSummaryResponse,
};

const ALL_ROLES: [UserRole; 3] = [
    UserRole::Admin,
    UserRole::ProcessLeader,
    UserRole::WarehouseManager,
];
const COUNTING_ROLES: [UserRole; 2] = [UserRole::Admin, UserRole::WarehouseManager];
const CLOSING_ROLES: [UserRole; 2] = [UserRole::Admin, UserRole::ProcessLeader];

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct InventoryHandlers {
    pub create: Arc<CreateSessionHandler>,
    pub close: Arc<CloseSessionHandler>,
    pub add_products: Arc<AddProductsHandler>,
    pub register_count: Arc<RegisterCountHandler>,
    pub list_counts: Arc<ListCountsHandler>,
    pub list_session_products: Arc<ListSessionProductsHandler>,
    pub list_sessions: Arc<ListSessionsHandler>,
    pub get_session: Arc<GetSessionHandler>,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/inventory-sessions
pub async fn list_inventory_sessions(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Query(params): Query<ListSessionsParams>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &ALL_ROLES) {
        return response;
    }
    let period = match params.period.as_deref() {
        Some(raw) => match raw.parse::<Period>() {
            Ok(period) => Some(period),
            Err(_) => return bad_request("Invalid period, expected YYYY-MM"),
        },
        None => None,
    };

    let query = ListSessionsQuery {
        warehouse_id: params.warehouse_id,
        period,
        status: params.status,
        actor_role: actor.role,
        actor_warehouse_ids: actor.warehouse_ids,
    };
    match handlers.list_sessions.handle(query).await {
        Ok(summaries) => {
            let body: Vec<SessionSummaryResponse> =
                summaries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/inventory-sessions/:id
pub async fn get_inventory_session(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &ALL_ROLES) {
        return response;
    }
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return bad_request("Invalid session ID");
    };

    let query = GetSessionQuery {
        session_id,
        actor_role: actor.role,
        actor_warehouse_ids: actor.warehouse_ids,
    };
    match handlers.get_session.handle(query).await {
        Ok(summary) => {
            (StatusCode::OK, Json(SessionSummaryResponse::from(summary))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/inventory-sessions
pub async fn create_inventory_session(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &COUNTING_ROLES) {
        return response;
    }

    let cmd = CreateSessionCommand {
        warehouse_id: req.warehouse_id,
        period: Period::from_datetime(req.period),
        created_by: actor.id,
        creator_role: actor.role,
        creator_warehouse_ids: actor.warehouse_ids,
        today: Timestamp::now(),
    };
    match handlers.create.handle(cmd).await {
        Ok(session) => {
            (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// PUT /api/inventory-sessions/:id/close
pub async fn close_inventory_session(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &CLOSING_ROLES) {
        return response;
    }
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return bad_request("Invalid session ID");
    };

    match handlers.close.handle(CloseSessionCommand { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/inventory-sessions/:id/products
pub async fn add_session_products(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<AddSessionProductsRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &COUNTING_ROLES) {
        return response;
    }
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return bad_request("Invalid session ID");
    };
    if let Err(response) = assert_session_access(&handlers, &actor, session_id).await {
        return response;
    }

    let cmd = AddProductsCommand {
        session_id,
        product_ids: req.product_ids,
    };
    match handlers.add_products.handle(cmd).await {
        Ok(added) => (
            StatusCode::OK,
            Json(AddSessionProductsResponse { added: added.len() }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/inventory-sessions/:id/products
pub async fn list_session_products(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &COUNTING_ROLES) {
        return response;
    }
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return bad_request("Invalid session ID");
    };
    if let Err(response) = assert_session_access(&handlers, &actor, session_id).await {
        return response;
    }

    match handlers
        .list_session_products
        .handle(ListSessionProductsQuery { session_id })
        .await
    {
        Ok(items) => {
            let body: Vec<SessionProductResponse> = items.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/inventory-sessions/:id/counts
pub async fn register_inventory_count(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<CreateCountRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &COUNTING_ROLES) {
        return response;
    }
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return bad_request("Invalid session ID");
    };

    let cmd = RegisterCountCommand {
        session_id,
        product_id: req.product_id,
        packaging_quantity: req.packaging_quantity,
        measure_unit_id: req.measure_unit_id,
        actor_warehouse_ids: actor.warehouse_ids.clone(),
        actor_is_admin: actor.is_admin(),
    };
    let count = match handlers.register_count.handle(cmd).await {
        Ok(count) => count,
        Err(e) => return error_response(e),
    };

    // re-read through the list view so the response carries product and
    // unit data in the same shape as GET /counts
    match handlers
        .list_counts
        .handle(ListCountsQuery { session_id })
        .await
    {
        Ok(views) => match views.into_iter().find(|v| v.count.id() == count.id()) {
            Some(view) => (StatusCode::CREATED, Json(CountResponse::from(view))).into_response(),
            None => error_response(crate::domain::foundation::DomainError::database(
                "Registered count vanished",
            )),
        },
        Err(e) => error_response(e),
    }
}

/// GET /api/inventory-sessions/:id/counts
pub async fn list_inventory_counts(
    State(handlers): State<InventoryHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &ALL_ROLES) {
        return response;
    }
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return bad_request("Invalid session ID");
    };
    if actor.role == UserRole::WarehouseManager {
        if let Err(response) = assert_session_access(&handlers, &actor, session_id).await {
            return response;
        }
    }

    match handlers
        .list_counts
        .handle(ListCountsQuery { session_id })
        .await
    {
        Ok(views) => {
            let body: Vec<CountResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Boundary-level warehouse scope check for session-addressed routes,
/// reusing the detail query (404 on missing, 403 on out-of-scope).
async fn assert_session_access(
    handlers: &InventoryHandlers,
    actor: &AuthenticatedActor,
    session_id: SessionId,
) -> Result<(), Response> {
    let query = GetSessionQuery {
        session_id,
        actor_role: actor.role,
        actor_warehouse_ids: actor.warehouse_ids.clone(),
    };
    match handlers.get_session.handle(query).await {
        Ok(_) => Ok(()),
        Err(e) => Err(error_response(e)),
    }
}
