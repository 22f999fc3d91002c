//! HTTP handlers for feature flag endpoints. All admin-only.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::{ensure_roles, RequireAuth};
use crate::adapters::http::{bad_request, error_response};
use crate::application::handlers::flags::{
    CreateFlagCommand, CreateFlagHandler, ListFlagsHandler, ToggleFlagCommand, ToggleFlagHandler,
    UpdateFlagCommand, UpdateFlagHandler,
};
use crate::domain::foundation::{FlagId, UserRole};

use super::dto::{CreateFlagRequest, FlagResponse, UpdateFlagRequest};

#[derive(Clone)]
pub struct FlagHandlers {
    pub create: Arc<CreateFlagHandler>,
    pub update: Arc<UpdateFlagHandler>,
    pub toggle: Arc<ToggleFlagHandler>,
    pub list: Arc<ListFlagsHandler>,
}

/// GET /api/feature-flags
pub async fn list_flags(
    State(handlers): State<FlagHandlers>,
    RequireAuth(actor): RequireAuth,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    match handlers.list.handle().await {
        Ok(flags) => {
            let body: Vec<FlagResponse> = flags.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/feature-flags
pub async fn create_flag(
    State(handlers): State<FlagHandlers>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<CreateFlagRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let cmd = CreateFlagCommand {
        key: req.key,
        enabled: req.enabled,
        description: req.description,
    };
    match handlers.create.handle(cmd).await {
        Ok(flag) => (StatusCode::CREATED, Json(FlagResponse::from(&flag))).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/feature-flags/:id
pub async fn update_flag(
    State(handlers): State<FlagHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateFlagRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let Ok(id) = id.parse::<FlagId>() else {
        return bad_request("Invalid flag ID");
    };
    let cmd = UpdateFlagCommand {
        id,
        enabled: req.enabled,
        description: req.description,
    };
    match handlers.update.handle(cmd).await {
        Ok(flag) => (StatusCode::OK, Json(FlagResponse::from(&flag))).into_response(),
        Err(e) => error_response(e),
    }
}

/// PATCH /api/feature-flags/:id/toggle
pub async fn toggle_flag(
    State(handlers): State<FlagHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let Ok(id) = id.parse::<FlagId>() else {
        return bad_request("Invalid flag ID");
    };
    match handlers.toggle.handle(ToggleFlagCommand { id }).await {
        Ok(flag) => (StatusCode::OK, Json(FlagResponse::from(&flag))).into_response(),
        Err(e) => error_response(e),
    }
}
