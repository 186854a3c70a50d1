//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_entity::ticket::{Ticket, TicketStatus};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// One entry in an alert polling response.
#[derive(Debug, Clone, Serialize)]
pub struct AlertItem {
    /// Ticket ID, used to acknowledge the alert.
    pub id: Uuid,
    /// Ticket title.
    pub title: String,
    /// Current lifecycle status.
    pub status: TicketStatus,
}

impl From<Ticket> for AlertItem {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            title: ticket.title,
            status: ticket.status,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database connectivity.
    pub database: String,
    /// Service version.
    pub version: String,
}

/// Pending-transfer indicator for dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTransferResponse {
    /// Whether a file is waiting for the caller.
    pub has_incoming: bool,
}
