//! Request DTOs.

use serde::Deserialize;
use uuid::Uuid;

/// Body for creating or updating a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRequest {
    /// Short summary of the request.
    pub title: String,
    /// Full description of the request.
    pub description: String,
    /// Organizational unit (optional).
    pub unit_id: Option<Uuid>,
    /// Service categorization (optional).
    pub service_type_id: Option<Uuid>,
}

/// Body for assigning a ticket to an expert.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignRequest {
    /// The expert to assign. Omitting it leaves the ticket in the queue.
    pub expert_id: Option<Uuid>,
}

/// Body for posting a message on a ticket thread.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageRequest {
    /// Message text.
    pub message: String,
}

/// Body for leaving feedback on a completed ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    /// Rating, 1 to 5.
    pub rating: i32,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
}

/// Body for updating the caller's contact fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactRequest {
    /// Office room number.
    pub room_number: Option<String>,
    /// Office phone number; required, exactly 8 digits.
    pub phone_number: String,
}
