//! Ticket lifecycle use cases.
//!
//! Transitions are attempted as guarded UPDATEs first. When the guarded
//! statement matches no row, the ticket is fetched once more and the
//! pure entity guard produces the precise error (`NotFound` for a
//! missing or invisible ticket, `PreconditionFailed` for a closed
//! window), so the caller always gets a typed reason.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use helpdesk_core::error::AppError;
use helpdesk_core::result::AppResult;
use helpdesk_database::repositories::feedback::FeedbackRepository;
use helpdesk_database::repositories::message::MessageRepository;
use helpdesk_database::repositories::ticket::TicketRepository;
use helpdesk_database::repositories::user::UserRepository;
use helpdesk_entity::ticket::{NewTicket, Ticket, TicketChanges, TicketFeedback};
use helpdesk_entity::user::UserRole;

use crate::context::RequestContext;

use super::views::{ManagerQueues, TicketOverview};

/// The ticket lifecycle engine plus the role-scoped queue queries.
#[derive(Debug, Clone)]
pub struct TicketService {
    ticket_repo: Arc<TicketRepository>,
    message_repo: Arc<MessageRepository>,
    feedback_repo: Arc<FeedbackRepository>,
    user_repo: Arc<UserRepository>,
}

impl TicketService {
    /// Creates a new ticket service.
    pub fn new(
        ticket_repo: Arc<TicketRepository>,
        message_repo: Arc<MessageRepository>,
        feedback_repo: Arc<FeedbackRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            ticket_repo,
            message_repo,
            feedback_repo,
            user_repo,
        }
    }

    /// File a new ticket for the calling requester.
    pub async fn create(&self, ctx: &RequestContext, data: NewTicket) -> AppResult<Ticket> {
        ctx.require_requester()?;
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if data.description.trim().is_empty() {
            return Err(AppError::validation("Description is required"));
        }

        let ticket = self.ticket_repo.create(ctx.user_id, &data).await?;
        info!(ticket_id = %ticket.id, user_id = %ctx.user_id, "Ticket created");
        Ok(ticket)
    }

    /// Fetch a single ticket, scoped to what the caller may see:
    /// managers see everything, requesters their own tickets, experts
    /// their assignments. Anything else reads as not found.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Ticket> {
        let ticket = self
            .ticket_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Ticket {id} not found")))?;

        let visible = match ctx.role {
            UserRole::Manager => true,
            UserRole::Requester => ticket.requester_id == ctx.user_id,
            UserRole::Expert => ticket.assigned_to == Some(ctx.user_id),
        };
        if !visible {
            return Err(AppError::not_found(format!("Ticket {id} not found")));
        }
        Ok(ticket)
    }

    /// Update a ticket the caller filed, while it is still editable.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: TicketChanges,
    ) -> AppResult<Ticket> {
        ctx.require_requester()?;
        if changes.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if changes.description.trim().is_empty() {
            return Err(AppError::validation("Description is required"));
        }

        match self
            .ticket_repo
            .update_details(id, ctx.user_id, &changes)
            .await?
        {
            Some(ticket) => Ok(ticket),
            None => Err(self.explain_requester_failure(id, ctx.user_id).await?),
        }
    }

    /// Delete a ticket the caller filed, while it is still editable.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_requester()?;
        if self.ticket_repo.delete(id, ctx.user_id).await? {
            info!(ticket_id = %id, user_id = %ctx.user_id, "Ticket deleted");
            return Ok(());
        }
        Err(self.explain_requester_failure(id, ctx.user_id).await?)
    }

    /// Assign a ticket to an expert (manager only).
    ///
    /// Passing no expert is a deliberate no-op: the triage form submits
    /// without a selection and the ticket simply stays in the queue.
    pub async fn assign(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        expert_id: Option<Uuid>,
    ) -> AppResult<Ticket> {
        ctx.require_manager()?;

        let Some(expert_id) = expert_id else {
            return self
                .ticket_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Ticket {id} not found")));
        };

        let expert = self
            .user_repo
            .find_by_id(expert_id)
            .await?
            .ok_or_else(|| AppError::validation("Unknown expert"))?;
        if expert.role != UserRole::Expert {
            return Err(AppError::validation("Assignee must be an expert"));
        }

        match self.ticket_repo.assign(id, expert_id).await? {
            Some(ticket) => {
                info!(ticket_id = %id, expert_id = %expert_id, "Ticket assigned");
                Ok(ticket)
            }
            None => {
                let ticket = self
                    .ticket_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Ticket {id} not found")))?;
                ticket.guard_assign()?;
                Err(AppError::precondition_failed("Ticket changed concurrently"))
            }
        }
    }

    /// Mark an assignment complete (assigned expert only).
    pub async fn mark_done(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Ticket> {
        ctx.require_expert()?;
        match self.ticket_repo.mark_done(id, ctx.user_id).await? {
            Some(ticket) => {
                info!(ticket_id = %id, expert_id = %ctx.user_id, "Ticket completed");
                Ok(ticket)
            }
            None => Err(self.explain_expert_failure(id, ctx.user_id).await?),
        }
    }

    /// Send an assignment back to manager triage (assigned expert only).
    pub async fn return_to_manager(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Ticket> {
        ctx.require_expert()?;
        match self.ticket_repo.return_to_manager(id, ctx.user_id).await? {
            Some(ticket) => {
                info!(ticket_id = %id, expert_id = %ctx.user_id, "Ticket returned to manager");
                Ok(ticket)
            }
            None => Err(self.explain_expert_failure(id, ctx.user_id).await?),
        }
    }

    /// Leave a rating on a completed ticket (its requester only, once).
    pub async fn submit_feedback(
        &self,
        ctx: &RequestContext,
        ticket_id: Uuid,
        rating: i32,
        comment: &str,
    ) -> AppResult<TicketFeedback> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }

        let ticket = self
            .ticket_repo
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Ticket {ticket_id} not found")))?;
        ticket.guard_feedback(ctx.user_id)?;

        self.feedback_repo
            .create(ticket_id, ctx.user_id, rating, comment)
            .await
    }

    /// The calling requester's dashboard: open tickets oldest first,
    /// then completed ones most recent first, each with live signals.
    pub async fn requester_dashboard(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<Vec<TicketOverview>> {
        ctx.require_requester()?;

        let mut tickets = self.ticket_repo.find_active_by_requester(ctx.user_id).await?;
        tickets.extend(self.ticket_repo.find_done_by_requester(ctx.user_id).await?);
        self.enrich(ctx.user_id, tickets).await
    }

    /// The manager's triage queues.
    pub async fn manager_queues(&self, ctx: &RequestContext) -> AppResult<ManagerQueues> {
        ctx.require_manager()?;
        Ok(ManagerQueues {
            new_tickets: self.ticket_repo.find_new_from_requesters().await?,
            returned: self.ticket_repo.find_returned().await?,
            in_progress: self.ticket_repo.find_in_progress().await?,
            done: self.ticket_repo.find_done().await?,
        })
    }

    /// The calling expert's worklist: open assignments oldest first,
    /// then completed ones most recent first, each with live signals.
    pub async fn expert_dashboard(&self, ctx: &RequestContext) -> AppResult<Vec<TicketOverview>> {
        ctx.require_expert()?;

        let mut tickets = self.ticket_repo.find_active_for_expert(ctx.user_id).await?;
        tickets.extend(self.ticket_repo.find_done_for_expert(ctx.user_id).await?);
        self.enrich(ctx.user_id, tickets).await
    }

    /// Attach the recomputed dashboard signals to each ticket.
    async fn enrich(&self, viewer_id: Uuid, tickets: Vec<Ticket>) -> AppResult<Vec<TicketOverview>> {
        let mut out = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            let queue_position = match ticket.assigned_to {
                Some(expert_id) => Some(
                    self.ticket_repo
                        .count_before(expert_id, ticket.created_at)
                        .await?,
                ),
                None => None,
            };
            let has_unread = self.message_repo.has_unread(ticket.id, viewer_id).await?;
            out.push(TicketOverview {
                ticket,
                queue_position,
                has_unread,
            });
        }
        Ok(out)
    }

    /// Resolve why a guarded requester mutation matched nothing.
    async fn explain_requester_failure(&self, id: Uuid, caller_id: Uuid) -> AppResult<AppError> {
        match self.ticket_repo.find_by_id(id).await? {
            Some(ticket) => Ok(ticket
                .guard_requester_mutation(caller_id)
                .err()
                .unwrap_or_else(|| AppError::precondition_failed("Ticket changed concurrently"))),
            None => Ok(AppError::not_found(format!("Ticket {id} not found"))),
        }
    }

    /// Resolve why a guarded expert transition matched nothing.
    async fn explain_expert_failure(&self, id: Uuid, caller_id: Uuid) -> AppResult<AppError> {
        match self.ticket_repo.find_by_id(id).await? {
            Some(ticket) => Ok(ticket
                .guard_expert_transition(caller_id)
                .err()
                .unwrap_or_else(|| AppError::precondition_failed("Ticket changed concurrently"))),
            None => Ok(AppError::not_found(format!("Ticket {id} not found"))),
        }
    }
}
