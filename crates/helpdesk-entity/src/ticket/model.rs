//! Ticket entity model and lifecycle transition guards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use helpdesk_core::{AppError, AppResult};

use super::status::{ReturnStatus, TicketStatus};

/// A support request with a lifecycle status and optional assignee.
///
/// Invariants (enforced by the guards below and by the guarded UPDATE
/// statements in the repository layer):
/// - `status = in_progress` if and only if `assigned_to` is set.
/// - `return_status = returned` implies `status = new` and no assignee.
/// - once `done`, no lifecycle transition applies.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: Uuid,
    /// Short summary of the request.
    pub title: String,
    /// Full description of the request.
    pub description: String,
    /// The user who filed the ticket.
    pub requester_id: Uuid,
    /// Organizational unit (optional; nulled when the unit is removed).
    pub unit_id: Option<Uuid>,
    /// Service categorization (optional).
    pub service_type_id: Option<Uuid>,
    /// Lifecycle status.
    pub status: TicketStatus,
    /// The expert currently responsible, if any.
    pub assigned_to: Option<Uuid>,
    /// Whether the manager's polling client has been alerted.
    pub notified_to_manager: bool,
    /// Whether the assigned expert's polling client has been alerted.
    pub notified_to_expert: bool,
    /// Whether the ticket was sent back by an expert.
    pub return_status: ReturnStatus,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Whether the requester may still edit or delete this ticket.
    ///
    /// The window closes as soon as a manager assigns the ticket or the
    /// status leaves `new`.
    pub fn is_editable(&self) -> bool {
        self.status == TicketStatus::New && self.assigned_to.is_none()
    }

    /// Guard requester edit/delete: owner only, inside the editable window.
    pub fn guard_requester_mutation(&self, caller_id: Uuid) -> AppResult<()> {
        if self.requester_id != caller_id {
            return Err(AppError::not_found(format!("Ticket {} not found", self.id)));
        }
        if !self.is_editable() {
            return Err(AppError::precondition_failed(
                "This ticket can no longer be edited or deleted",
            ));
        }
        Ok(())
    }

    /// Guard manager assignment: any ticket that is not yet done.
    pub fn guard_assign(&self) -> AppResult<()> {
        if self.status == TicketStatus::Done {
            return Err(AppError::precondition_failed(
                "A completed ticket cannot be assigned",
            ));
        }
        Ok(())
    }

    /// Guard expert transitions (mark done, return to manager): the
    /// caller must be the current assignee and the ticket not yet done.
    pub fn guard_expert_transition(&self, caller_id: Uuid) -> AppResult<()> {
        if self.assigned_to != Some(caller_id) {
            return Err(AppError::not_found(format!("Ticket {} not found", self.id)));
        }
        if self.status == TicketStatus::Done {
            return Err(AppError::precondition_failed(
                "A completed ticket cannot be transitioned",
            ));
        }
        Ok(())
    }

    /// Guard feedback creation: only the requester, only once done.
    pub fn guard_feedback(&self, caller_id: Uuid) -> AppResult<()> {
        if self.requester_id != caller_id {
            return Err(AppError::forbidden(
                "Only the requester may rate this ticket",
            ));
        }
        if self.status != TicketStatus::Done {
            return Err(AppError::precondition_failed(
                "Feedback can only be left on a completed ticket",
            ));
        }
        Ok(())
    }

    /// Whether the given user participates in this ticket's conversation.
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id || self.assigned_to == Some(user_id)
    }
}

/// Fields required to create a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    /// Short summary of the request.
    pub title: String,
    /// Full description of the request.
    pub description: String,
    /// Organizational unit (optional).
    pub unit_id: Option<Uuid>,
    /// Service categorization (optional).
    pub service_type_id: Option<Uuid>,
}

/// Fields a requester may change while the ticket is editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketChanges {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
    /// New organizational unit.
    pub unit_id: Option<Uuid>,
    /// New service categorization.
    pub service_type_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status: TicketStatus, assigned_to: Option<Uuid>) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            title: "Printer jam".to_string(),
            description: "Paper stuck in tray 2".to_string(),
            requester_id: Uuid::new_v4(),
            unit_id: None,
            service_type_id: None,
            status,
            assigned_to,
            notified_to_manager: false,
            notified_to_expert: false,
            return_status: ReturnStatus::None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_editable_only_while_new_and_unassigned() {
        assert!(ticket(TicketStatus::New, None).is_editable());
        assert!(!ticket(TicketStatus::New, Some(Uuid::new_v4())).is_editable());
        assert!(!ticket(TicketStatus::InProgress, Some(Uuid::new_v4())).is_editable());
        assert!(!ticket(TicketStatus::Done, None).is_editable());
    }

    #[test]
    fn test_requester_mutation_guard() {
        let t = ticket(TicketStatus::New, None);
        assert!(t.guard_requester_mutation(t.requester_id).is_ok());

        // Non-owner sees not-found, never a precondition error.
        let err = t.guard_requester_mutation(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::NotFound);

        let assigned = ticket(TicketStatus::InProgress, Some(Uuid::new_v4()));
        let err = assigned
            .guard_requester_mutation(assigned.requester_id)
            .unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::PreconditionFailed);
    }

    #[test]
    fn test_done_tickets_cannot_be_assigned() {
        assert!(ticket(TicketStatus::New, None).guard_assign().is_ok());
        assert!(
            ticket(TicketStatus::InProgress, Some(Uuid::new_v4()))
                .guard_assign()
                .is_ok()
        );
        let err = ticket(TicketStatus::Done, None).guard_assign().unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::PreconditionFailed);
    }

    #[test]
    fn test_expert_transition_requires_assignee() {
        let expert = Uuid::new_v4();
        let t = ticket(TicketStatus::InProgress, Some(expert));
        assert!(t.guard_expert_transition(expert).is_ok());

        let err = t.guard_expert_transition(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::NotFound);

        let unassigned = ticket(TicketStatus::New, None);
        assert!(unassigned.guard_expert_transition(expert).is_err());
    }

    #[test]
    fn test_feedback_guard() {
        let mut t = ticket(TicketStatus::Done, None);
        assert!(t.guard_feedback(t.requester_id).is_ok());

        let err = t.guard_feedback(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::Forbidden);

        t.status = TicketStatus::InProgress;
        let err = t.guard_feedback(t.requester_id).unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::PreconditionFailed);
    }

    #[test]
    fn test_participants() {
        let expert = Uuid::new_v4();
        let t = ticket(TicketStatus::InProgress, Some(expert));
        assert!(t.is_participant(t.requester_id));
        assert!(t.is_participant(expert));
        assert!(!t.is_participant(Uuid::new_v4()));
    }
}
