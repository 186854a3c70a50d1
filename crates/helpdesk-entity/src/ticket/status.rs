//! Ticket lifecycle status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a ticket.
///
/// `Cancelled` is declared but no exposed operation transitions into it;
/// it is reachable only through direct administrative edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Awaiting manager triage.
    New,
    /// Assigned to an expert and being worked.
    InProgress,
    /// Resolved; immutable to further lifecycle transitions.
    Done,
    /// Administratively cancelled.
    Cancelled,
}

impl TicketStatus {
    /// Whether the ticket still counts as open work for queue metrics.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::New | Self::InProgress)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = helpdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(helpdesk_core::AppError::validation(format!(
                "Invalid ticket status: '{s}'"
            ))),
        }
    }
}

/// Whether a `new` ticket came straight from its requester or was sent
/// back by an expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "return_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReturnStatus {
    /// Initial submission by the requester.
    None,
    /// Returned to manager triage by an expert.
    Returned,
}

impl ReturnStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Returned => "returned",
        }
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(TicketStatus::New.is_active());
        assert!(TicketStatus::InProgress.is_active());
        assert!(!TicketStatus::Done.is_active());
        assert!(!TicketStatus::Cancelled.is_active());
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["new", "in_progress", "done", "cancelled"] {
            assert_eq!(s.parse::<TicketStatus>().unwrap().as_str(), s);
        }
        assert!("open".parse::<TicketStatus>().is_err());
    }
}
