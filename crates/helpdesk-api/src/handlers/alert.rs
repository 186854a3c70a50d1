//! Alert polling handlers for the manager and expert clients.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use helpdesk_entity::ticket::Audience;

use crate::dto::response::{AlertItem, ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/manager/alerts
pub async fn manager_alerts(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<AlertItem>>>, ApiError> {
    let tickets = state
        .alert_service
        .check_new(&caller, Audience::Manager)
        .await?;
    Ok(Json(ApiResponse::ok(
        tickets.into_iter().map(AlertItem::from).collect(),
    )))
}

/// PUT /api/manager/alerts/{id}
pub async fn acknowledge_manager_alert(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .alert_service
        .mark_notified(&caller, Audience::Manager, id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Alert acknowledged".to_string(),
    })))
}

/// GET /api/expert/alerts
pub async fn expert_alerts(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<AlertItem>>>, ApiError> {
    let tickets = state
        .alert_service
        .check_new(&caller, Audience::Expert)
        .await?;
    Ok(Json(ApiResponse::ok(
        tickets.into_iter().map(AlertItem::from).collect(),
    )))
}

/// PUT /api/expert/alerts/{id}
pub async fn acknowledge_expert_alert(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .alert_service
        .mark_notified(&caller, Audience::Expert, id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Alert acknowledged".to_string(),
    })))
}
