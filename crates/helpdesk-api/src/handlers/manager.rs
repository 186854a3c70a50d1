//! Manager triage, assignment, and reporting handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use helpdesk_entity::ticket::Ticket;
use helpdesk_service::{ManagerQueues, TicketReport};

use crate::dto::request::AssignRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/manager/tickets — the triage queues.
pub async fn list_queues(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<ManagerQueues>>, ApiError> {
    let queues = state.ticket_service.manager_queues(&caller).await?;
    Ok(Json(ApiResponse::ok(queues)))
}

/// POST /api/manager/tickets/{id}/assign
pub async fn assign_ticket(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignRequest>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let ticket = state
        .ticket_service
        .assign(&caller, id, body.expert_id)
        .await?;
    Ok(Json(ApiResponse::ok(ticket)))
}

/// GET /api/manager/reports
pub async fn reports(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<TicketReport>>, ApiError> {
    let report = state.report_service.overview(&caller).await?;
    Ok(Json(ApiResponse::ok(report)))
}
