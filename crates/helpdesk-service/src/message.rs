//! Per-ticket messaging between the requester and the assigned expert.

use std::sync::Arc;

use uuid::Uuid;

use helpdesk_core::error::AppError;
use helpdesk_core::result::AppResult;
use helpdesk_database::repositories::message::MessageRepository;
use helpdesk_database::repositories::ticket::TicketRepository;
use helpdesk_entity::ticket::TicketMessage;

use crate::context::RequestContext;

/// Serves the per-ticket message thread.
#[derive(Debug, Clone)]
pub struct MessageService {
    ticket_repo: Arc<TicketRepository>,
    message_repo: Arc<MessageRepository>,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(ticket_repo: Arc<TicketRepository>, message_repo: Arc<MessageRepository>) -> Self {
        Self {
            ticket_repo,
            message_repo,
        }
    }

    /// The full thread, oldest first. Viewing acknowledges the other
    /// side's messages as a side effect; the caller's own messages keep
    /// their unread flag for the counterpart.
    pub async fn view_thread(
        &self,
        ctx: &RequestContext,
        ticket_id: Uuid,
    ) -> AppResult<Vec<TicketMessage>> {
        self.guard_participant(ctx, ticket_id).await?;
        self.message_repo
            .mark_counterpart_read(ticket_id, ctx.user_id)
            .await?;
        self.message_repo.find_by_ticket(ticket_id).await
    }

    /// Append a message to the thread, initially unread.
    pub async fn post(
        &self,
        ctx: &RequestContext,
        ticket_id: Uuid,
        text: &str,
    ) -> AppResult<TicketMessage> {
        if text.trim().is_empty() {
            return Err(AppError::validation("Message text is required"));
        }
        self.guard_participant(ctx, ticket_id).await?;
        self.message_repo
            .create(ticket_id, ctx.user_id, text)
            .await
    }

    /// Only the requester and the currently assigned expert may touch
    /// the thread; everyone else is rejected outright.
    async fn guard_participant(&self, ctx: &RequestContext, ticket_id: Uuid) -> AppResult<()> {
        let ticket = self
            .ticket_repo
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Ticket {ticket_id} not found")))?;

        if !ticket.is_participant(ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the requester and the assigned expert may use this conversation",
            ));
        }
        Ok(())
    }
}
