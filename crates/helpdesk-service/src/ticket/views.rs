//! Read models for the role-scoped dashboards.

use serde::Serialize;

use helpdesk_entity::ticket::Ticket;

/// A ticket enriched with the live dashboard signals.
///
/// Both signals are recomputed on every read; neither is stored.
#[derive(Debug, Clone, Serialize)]
pub struct TicketOverview {
    /// The underlying ticket.
    #[serde(flatten)]
    pub ticket: Ticket,
    /// Open tickets of the same assignee created earlier. `None` while
    /// the ticket is unassigned.
    pub queue_position: Option<i64>,
    /// Whether the viewer has unread messages on this ticket.
    pub has_unread: bool,
}

/// The manager's triage queues, one list per workflow stage.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerQueues {
    /// Fresh submissions awaiting assignment, oldest first.
    pub new_tickets: Vec<Ticket>,
    /// Tickets sent back by experts, oldest first.
    pub returned: Vec<Ticket>,
    /// Tickets currently being worked, oldest first.
    pub in_progress: Vec<Ticket>,
    /// Completed tickets, most recent first.
    pub done: Vec<Ticket>,
}
