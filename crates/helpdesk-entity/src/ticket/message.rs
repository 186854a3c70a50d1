//! Per-ticket conversation message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A message in a ticket's conversation thread.
///
/// `is_read` tracks whether the sender's counterpart has opened the
/// thread since this message was posted; viewing the thread is itself
/// the read receipt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// The ticket this message belongs to.
    pub ticket_id: Uuid,
    /// The participant who wrote the message.
    pub sender_id: Uuid,
    /// Message text.
    pub message: String,
    /// Whether the counterpart has seen this message.
    pub is_read: bool,
    /// When the message was posted.
    pub created_at: DateTime<Utc>,
}
