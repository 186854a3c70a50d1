//! Requester-facing ticket handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use helpdesk_entity::ticket::{NewTicket, Ticket, TicketChanges, TicketFeedback};
use helpdesk_service::TicketOverview;

use crate::dto::request::{FeedbackRequest, TicketRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/tickets — the caller's dashboard.
pub async fn list_tickets(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<Vec<TicketOverview>>>, ApiError> {
    let tickets = state.ticket_service.requester_dashboard(&caller).await?;
    Ok(Json(ApiResponse::ok(tickets)))
}

/// POST /api/tickets
pub async fn create_ticket(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(body): Json<TicketRequest>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let ticket = state
        .ticket_service
        .create(
            &caller,
            NewTicket {
                title: body.title,
                description: body.description,
                unit_id: body.unit_id,
                service_type_id: body.service_type_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(ticket)))
}

/// GET /api/tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let ticket = state.ticket_service.get(&caller, id).await?;
    Ok(Json(ApiResponse::ok(ticket)))
}

/// PUT /api/tickets/{id}
pub async fn update_ticket(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
    Json(body): Json<TicketRequest>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let ticket = state
        .ticket_service
        .update(
            &caller,
            id,
            TicketChanges {
                title: body.title,
                description: body.description,
                unit_id: body.unit_id,
                service_type_id: body.service_type_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(ticket)))
}

/// DELETE /api/tickets/{id}
pub async fn delete_ticket(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.ticket_service.delete(&caller, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Ticket deleted".to_string(),
    })))
}

/// POST /api/tickets/{id}/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
    Json(body): Json<FeedbackRequest>,
) -> Result<Json<ApiResponse<TicketFeedback>>, ApiError> {
    let feedback = state
        .ticket_service
        .submit_feedback(&caller, id, body.rating, &body.comment)
        .await?;
    Ok(Json(ApiResponse::ok(feedback)))
}
