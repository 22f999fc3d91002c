//! HTTP handlers for user administration endpoints. All admin-only.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::{ensure_roles, RequireAuth};
use crate::adapters::http::{bad_request, error_response};
use crate::application::handlers::users::{
    CreateUserCommand, CreateUserHandler, ListUsersHandler, SyncUsersCommand, SyncUsersHandler,
    UpdateUserCommand, UpdateUserHandler,
};
use crate::domain::foundation::{UserId, UserRole};

use super::dto::{
    CreateUserRequest, SyncUsersRequest, SyncUsersResponse, UpdateUserRequest, UserListResponse,
    UserResponse,
};

#[derive(Clone)]
pub struct UserHandlers {
    pub create: Arc<CreateUserHandler>,
    pub update: Arc<UpdateUserHandler>,
    pub list: Arc<ListUsersHandler>,
    pub sync: Arc<SyncUsersHandler>,
}

/// GET /api/users
pub async fn list_users(
    State(handlers): State<UserHandlers>,
    RequireAuth(actor): RequireAuth,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    match handlers.list.handle().await {
        Ok(items) => {
            let body: Vec<UserListResponse> = items.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/users
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let cmd = CreateUserCommand {
        identification: req.identification,
        name: req.name,
        email: req.email,
        role: req.role,
        password: req.password,
        warehouse_ids: req.warehouse_ids,
    };
    match handlers.create.handle(cmd).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(&user))).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/users/:id
pub async fn update_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let Ok(user_id) = id.parse::<UserId>() else {
        return bad_request("Invalid user ID");
    };
    let cmd = UpdateUserCommand {
        user_id,
        identification: req.identification,
        name: req.name,
        email: req.email,
        role: req.role,
        password: req.password,
        warehouse_ids: req.warehouse_ids,
        is_active: req.is_active,
    };
    match handlers.update.handle(cmd).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(&user))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/users/sync
pub async fn sync_users(
    State(handlers): State<UserHandlers>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<SyncUsersRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    match handlers.sync.handle(SyncUsersCommand { limit: req.limit }).await {
        Ok(created) => (StatusCode::OK, Json(SyncUsersResponse { created })).into_response(),
        Err(e) => error_response(e),
    }
}
