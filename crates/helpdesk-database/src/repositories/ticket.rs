//! Ticket repository implementation.
//!
//! Lifecycle transitions are written as guarded UPDATE statements: the
//! `WHERE` clause re-checks the precondition, so two racing actors (a
//! manager assigning while the expert returns) can never both win. A
//! transition that matches no row reports the reason through the
//! fetched-and-guarded fallback in the service layer.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::ticket::{NewTicket, Ticket, TicketChanges, TicketStatus};

/// Repository for ticket CRUD, lifecycle transitions, and queue queries.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a ticket by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find ticket by id", e)
            })
    }

    /// Create a new ticket in the `new` state for the given requester.
    pub async fn create(&self, requester_id: Uuid, data: &NewTicket) -> AppResult<Ticket> {
        sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (title, description, requester_id, unit_id, service_type_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(requester_id)
        .bind(data.unit_id)
        .bind(data.service_type_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create ticket", e))
    }

    /// Update requester-editable fields, guarded by the editable window
    /// (owner, status `new`, unassigned). Returns `None` when the guard
    /// does not match.
    pub async fn update_details(
        &self,
        id: Uuid,
        requester_id: Uuid,
        changes: &TicketChanges,
    ) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET title = $3, description = $4, unit_id = $5, \
                                service_type_id = $6, updated_at = NOW() \
             WHERE id = $1 AND requester_id = $2 AND status = 'new' AND assigned_to IS NULL \
             RETURNING *",
        )
        .bind(id)
        .bind(requester_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.unit_id)
        .bind(changes.service_type_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update ticket", e))
    }

    /// Delete a ticket, guarded by the editable window. Messages and
    /// feedback cascade. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM tickets \
             WHERE id = $1 AND requester_id = $2 AND status = 'new' AND assigned_to IS NULL",
        )
        .bind(id)
        .bind(requester_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete ticket", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Assign a ticket to an expert and move it to `in_progress`.
    ///
    /// Resets the expert alert flag so the new assignee's polling client
    /// is alerted, and clears any `returned` marker. Done tickets never
    /// match.
    pub async fn assign(&self, id: Uuid, expert_id: Uuid) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET assigned_to = $2, status = 'in_progress', \
                                return_status = 'none', notified_to_expert = FALSE, \
                                updated_at = NOW() \
             WHERE id = $1 AND status <> 'done' RETURNING *",
        )
        .bind(id)
        .bind(expert_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign ticket", e))
    }

    /// Mark a ticket done. Only the current assignee matches.
    pub async fn mark_done(&self, id: Uuid, expert_id: Uuid) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET status = 'done', updated_at = NOW() \
             WHERE id = $1 AND assigned_to = $2 AND status <> 'done' RETURNING *",
        )
        .bind(id)
        .bind(expert_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark ticket done", e))
    }

    /// Send a ticket back to manager triage: unassign, back to `new`,
    /// flagged `returned`. Resets the manager alert flag so the triage
    /// queue re-alerts.
    pub async fn return_to_manager(&self, id: Uuid, expert_id: Uuid) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET assigned_to = NULL, status = 'new', \
                                return_status = 'returned', notified_to_manager = FALSE, \
                                updated_at = NOW() \
             WHERE id = $1 AND assigned_to = $2 AND status <> 'done' RETURNING *",
        )
        .bind(id)
        .bind(expert_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to return ticket", e))
    }

    /// A requester's open tickets, oldest first.
    pub async fn find_active_by_requester(&self, requester_id: Uuid) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE requester_id = $1 AND status <> 'done' \
             ORDER BY created_at ASC",
        )
        .bind(requester_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active tickets", e))
    }

    /// A requester's completed tickets, most recent first.
    pub async fn find_done_by_requester(&self, requester_id: Uuid) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE requester_id = $1 AND status = 'done' \
             ORDER BY created_at DESC",
        )
        .bind(requester_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list done tickets", e))
    }

    /// Manager triage queue: fresh submissions, oldest first.
    pub async fn find_new_from_requesters(&self) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE status = 'new' AND return_status = 'none' \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list new tickets", e))
    }

    /// Manager triage queue: tickets sent back by experts, oldest first.
    pub async fn find_returned(&self) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE status = 'new' AND return_status = 'returned' \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list returned tickets", e)
        })
    }

    /// All tickets currently being worked, oldest first.
    pub async fn find_in_progress(&self) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE status = 'in_progress' ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list in-progress tickets", e)
        })
    }

    /// All completed tickets, most recent first.
    pub async fn find_done(&self) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE status = 'done' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list done tickets", e))
    }

    /// An expert's open assignments, oldest first.
    pub async fn find_active_for_expert(&self, expert_id: Uuid) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE assigned_to = $1 AND status IN ('new', 'in_progress') \
             ORDER BY created_at ASC",
        )
        .bind(expert_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list expert tickets", e)
        })
    }

    /// An expert's completed assignments, most recent first.
    pub async fn find_done_for_expert(&self, expert_id: Uuid) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE assigned_to = $1 AND status = 'done' \
             ORDER BY created_at DESC",
        )
        .bind(expert_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list expert done tickets", e)
        })
    }

    /// Queue-position metric: open tickets of the same assignee created
    /// strictly before the given instant. Recomputed on every read.
    pub async fn count_before(
        &self,
        expert_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tickets \
             WHERE assigned_to = $1 AND status IN ('new', 'in_progress') AND created_at < $2",
        )
        .bind(expert_id)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count queue position", e))
    }

    /// Tickets the manager's polling client has not been alerted about.
    pub async fn find_unnotified_for_manager(&self) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE status = 'new' AND notified_to_manager = FALSE \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list manager alerts", e))
    }

    /// Tickets the given expert's polling client has not been alerted about.
    pub async fn find_unnotified_for_expert(&self, expert_id: Uuid) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets \
             WHERE assigned_to = $1 AND status IN ('new', 'in_progress') \
               AND notified_to_expert = FALSE \
             ORDER BY created_at ASC",
        )
        .bind(expert_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list expert alerts", e))
    }

    /// Set the manager alert flag. Idempotent: re-marking an already
    /// notified ticket is a no-op.
    pub async fn mark_manager_notified(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE tickets SET notified_to_manager = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark manager notified", e)
            })?;
        Ok(())
    }

    /// Set the expert alert flag, scoped to the current assignee. Idempotent.
    pub async fn mark_expert_notified(&self, id: Uuid, expert_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE tickets SET notified_to_expert = TRUE WHERE id = $1 AND assigned_to = $2")
            .bind(id)
            .bind(expert_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark expert notified", e)
            })?;
        Ok(())
    }

    /// Ticket counts grouped by status, for manager reports.
    pub async fn count_by_status(&self) -> AppResult<Vec<(TicketStatus, i64)>> {
        sqlx::query_as::<_, (TicketStatus, i64)>(
            "SELECT status, COUNT(*) FROM tickets GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count by status", e))
    }

    /// Ticket counts grouped by unit name for tickets created since the
    /// cutoff. Unitless tickets group under NULL.
    pub async fn count_by_unit_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> AppResult<Vec<(Option<String>, i64)>> {
        sqlx::query_as::<_, (Option<String>, i64)>(
            "SELECT u.name, COUNT(*) FROM tickets t \
             LEFT JOIN units u ON u.id = t.unit_id \
             WHERE t.created_at >= $1 \
             GROUP BY u.name",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count by unit", e))
    }
}
