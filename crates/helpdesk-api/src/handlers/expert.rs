//! Expert worklist and transition handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use helpdesk_entity::ticket::Ticket;
use helpdesk_service::TicketOverview;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/expert/tickets — the caller's worklist.
pub async fn list_tickets(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<TicketOverview>>>, ApiError> {
    let tickets = state.ticket_service.expert_dashboard(&caller).await?;
    Ok(Json(ApiResponse::ok(tickets)))
}

/// POST /api/expert/tickets/{id}/done
pub async fn mark_done(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let ticket = state.ticket_service.mark_done(&caller, id).await?;
    Ok(Json(ApiResponse::ok(ticket)))
}

/// POST /api/expert/tickets/{id}/return
pub async fn return_ticket(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let ticket = state.ticket_service.return_to_manager(&caller, id).await?;
    Ok(Json(ApiResponse::ok(ticket)))
}
