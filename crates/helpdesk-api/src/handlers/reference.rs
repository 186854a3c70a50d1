//! Reference data handlers backing the client pickers.

use axum::Json;
use axum::extract::State;

use helpdesk_entity::service_type::ServiceType;
use helpdesk_entity::unit::Unit;
use helpdesk_entity::user::User;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/users/managers
pub async fn list_managers(
    State(state): State<AppState>,
    _caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let managers = state.user_service.managers().await?;
    Ok(Json(ApiResponse::ok(managers)))
}

/// GET /api/users/experts
pub async fn list_experts(
    State(state): State<AppState>,
    _caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let experts = state.user_service.experts().await?;
    Ok(Json(ApiResponse::ok(experts)))
}

/// GET /api/units
pub async fn list_units(
    State(state): State<AppState>,
    _caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<Unit>>>, ApiError> {
    let units = state.user_service.units().await?;
    Ok(Json(ApiResponse::ok(units)))
}

/// GET /api/service-types
pub async fn list_service_types(
    State(state): State<AppState>,
    _caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<ServiceType>>>, ApiError> {
    let types = state.user_service.service_types().await?;
    Ok(Json(ApiResponse::ok(types)))
}
