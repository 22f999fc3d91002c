//! HTTP handlers for measurement unit endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::{ensure_roles, RequireAuth};
use crate::adapters::http::{bad_request, error_response};
use crate::application::handlers::units::{
    CreateUnitCommand, CreateUnitHandler, ListUnitsHandler, ToggleUnitCommand, ToggleUnitHandler,
    UpdateUnitCommand, UpdateUnitHandler,
};
use crate::domain::foundation::{UnitId, UserRole};

use super::dto::{CreateUnitRequest, UnitResponse, UpdateUnitRequest};

#[derive(Clone)]
pub struct UnitHandlers {
    pub create: Arc<CreateUnitHandler>,
    pub update: Arc<UpdateUnitHandler>,
    pub toggle: Arc<ToggleUnitHandler>,
    pub list: Arc<ListUnitsHandler>,
}

/// GET /api/measurement-units
pub async fn list_units(
    State(handlers): State<UnitHandlers>,
    RequireAuth(_actor): RequireAuth,
) -> Response {
    match handlers.list.handle().await {
        Ok(units) => {
            let body: Vec<UnitResponse> = units.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/measurement-units
pub async fn create_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<CreateUnitRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let cmd = CreateUnitCommand {
        name: req.name,
        abbreviation: req.abbreviation,
    };
    match handlers.create.handle(cmd).await {
        Ok(unit) => (StatusCode::CREATED, Json(UnitResponse::from(&unit))).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/measurement-units/:id
pub async fn update_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateUnitRequest>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let Ok(id) = id.parse::<UnitId>() else {
        return bad_request("Invalid unit ID");
    };
    let cmd = UpdateUnitCommand {
        id,
        name: req.name,
        abbreviation: req.abbreviation,
    };
    match handlers.update.handle(cmd).await {
        Ok(unit) => (StatusCode::OK, Json(UnitResponse::from(&unit))).into_response(),
        Err(e) => error_response(e),
    }
}

/// PATCH /api/measurement-units/:id/toggle
pub async fn toggle_unit(
    State(handlers): State<UnitHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = ensure_roles(&actor, &[UserRole::Admin]) {
        return response;
    }
    let Ok(id) = id.parse::<UnitId>() else {
        return bad_request("Invalid unit ID");
    };
    match handlers.toggle.handle(ToggleUnitCommand { id }).await {
        Ok(unit) => (StatusCode::OK, Json(UnitResponse::from(&unit))).into_response(),
        Err(e) => error_response(e),
    }
}
