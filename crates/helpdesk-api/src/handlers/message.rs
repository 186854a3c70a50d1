//! Per-ticket message thread handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use helpdesk_entity::ticket::TicketMessage;

use crate::dto::request::PostMessageRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/tickets/{id}/messages — returns the thread and marks the
/// counterpart's messages read.
pub async fn view_thread(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<TicketMessage>>>, ApiError> {
    let messages = state.message_service.view_thread(&caller, id).await?;
    Ok(Json(ApiResponse::ok(messages)))
}

/// POST /api/tickets/{id}/messages
pub async fn post_message(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
    Json(body): Json<PostMessageRequest>,
) -> Result<Json<ApiResponse<TicketMessage>>, ApiError> {
    let message = state
        .message_service
        .post(&caller, id, &body.message)
        .await?;
    Ok(Json(ApiResponse::ok(message)))
}
