//! Ticket feedback repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::ticket::TicketFeedback;

/// Repository for per-ticket feedback. At most one row per ticket,
/// enforced by a unique constraint.
#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    /// Create a new feedback repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record feedback for a ticket. A second submission for the same
    /// ticket trips the unique constraint and surfaces as a conflict.
    pub async fn create(
        &self,
        ticket_id: Uuid,
        user_id: Uuid,
        rating: i32,
        comment: &str,
    ) -> AppResult<TicketFeedback> {
        sqlx::query_as::<_, TicketFeedback>(
            "INSERT INTO ticket_feedback (ticket_id, user_id, rating, comment) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(ticket_id)
        .bind(user_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::conflict(
                "Feedback has already been submitted for this ticket",
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create feedback", e),
        })
    }

    /// Find the feedback left on a ticket, if any.
    pub async fn find_by_ticket(&self, ticket_id: Uuid) -> AppResult<Option<TicketFeedback>> {
        sqlx::query_as::<_, TicketFeedback>("SELECT * FROM ticket_feedback WHERE ticket_id = $1")
            .bind(ticket_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find feedback", e))
    }
}
