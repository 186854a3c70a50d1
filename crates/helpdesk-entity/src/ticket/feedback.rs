//! Ticket feedback entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Requester feedback left on a completed ticket.
///
/// At most one feedback record per ticket; the database enforces this
/// with a unique constraint on `ticket_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketFeedback {
    /// Unique feedback identifier.
    pub id: Uuid,
    /// The ticket being rated.
    pub ticket_id: Uuid,
    /// The user who left the rating.
    pub user_id: Uuid,
    /// Numeric rating.
    pub rating: i32,
    /// Free-form comment.
    pub comment: String,
    /// When the feedback was created.
    pub created_at: DateTime<Utc>,
}
