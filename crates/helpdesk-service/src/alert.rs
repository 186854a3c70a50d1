//! Deduplicated new-work alerts for the polling clients.
//!
//! Each ticket carries one boolean flag per audience. A ticket shows up
//! in `check_new` until the client acknowledges it with `mark_notified`;
//! the flags are reset by the lifecycle transitions that reintroduce
//! new work (returning clears the manager flag, assigning clears the
//! expert flag), so re-entry re-alerts.

use std::sync::Arc;

use uuid::Uuid;

use helpdesk_core::result::AppResult;
use helpdesk_database::repositories::ticket::TicketRepository;
use helpdesk_entity::ticket::{Audience, Ticket};

use crate::context::RequestContext;

/// Serves the alert polling endpoints.
#[derive(Debug, Clone)]
pub struct AlertService {
    ticket_repo: Arc<TicketRepository>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(ticket_repo: Arc<TicketRepository>) -> Self {
        Self { ticket_repo }
    }

    /// Tickets the caller's polling client has not yet been alerted
    /// about: unacknowledged `new` tickets for managers, unacknowledged
    /// assignments for the calling expert.
    pub async fn check_new(
        &self,
        ctx: &RequestContext,
        audience: Audience,
    ) -> AppResult<Vec<Ticket>> {
        match audience {
            Audience::Manager => {
                ctx.require_manager()?;
                self.ticket_repo.find_unnotified_for_manager().await
            }
            Audience::Expert => {
                ctx.require_expert()?;
                self.ticket_repo
                    .find_unnotified_for_expert(ctx.user_id)
                    .await
            }
        }
    }

    /// Acknowledge an alert. Idempotent; the expert variant only touches
    /// the caller's own assignments.
    pub async fn mark_notified(
        &self,
        ctx: &RequestContext,
        audience: Audience,
        ticket_id: Uuid,
    ) -> AppResult<()> {
        match audience {
            Audience::Manager => {
                ctx.require_manager()?;
                self.ticket_repo.mark_manager_notified(ticket_id).await
            }
            Audience::Expert => {
                ctx.require_expert()?;
                self.ticket_repo
                    .mark_expert_notified(ticket_id, ctx.user_id)
                    .await
            }
        }
    }
}
