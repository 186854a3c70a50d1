//! Ticket message repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::ticket::TicketMessage;

/// Repository for the per-ticket message thread.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The full thread for a ticket, oldest first.
    pub async fn find_by_ticket(&self, ticket_id: Uuid) -> AppResult<Vec<TicketMessage>> {
        sqlx::query_as::<_, TicketMessage>(
            "SELECT * FROM ticket_messages WHERE ticket_id = $1 ORDER BY created_at ASC",
        )
        .bind(ticket_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }

    /// Append a message to a ticket's thread, initially unread.
    pub async fn create(
        &self,
        ticket_id: Uuid,
        sender_id: Uuid,
        message: &str,
    ) -> AppResult<TicketMessage> {
        sqlx::query_as::<_, TicketMessage>(
            "INSERT INTO ticket_messages (ticket_id, sender_id, message) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(ticket_id)
        .bind(sender_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    /// Mark every message in the thread NOT sent by the viewer as read.
    /// Viewing a thread acknowledges the counterpart's messages; one's
    /// own messages keep their flag for the other side.
    pub async fn mark_counterpart_read(&self, ticket_id: Uuid, viewer_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE ticket_messages SET is_read = TRUE \
             WHERE ticket_id = $1 AND sender_id <> $2 AND is_read = FALSE",
        )
        .bind(ticket_id)
        .bind(viewer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark messages read", e))?;

        Ok(result.rows_affected())
    }

    /// Whether the viewer has unread messages on this ticket.
    pub async fn has_unread(&self, ticket_id: Uuid, viewer_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM ticket_messages \
             WHERE ticket_id = $1 AND sender_id <> $2 AND is_read = FALSE)",
        )
        .bind(ticket_id)
        .bind(viewer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check unread messages", e))
    }
}
