//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the ticketing workflow.
///
/// The role decides which dashboard a user sees and which lifecycle
/// transitions they may perform. Roles are fixed at provisioning time;
/// no exposed operation changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Files support requests and follows their progress.
    Requester,
    /// Triages incoming tickets and assigns them to experts.
    Manager,
    /// Resolves assigned tickets or returns them to the manager.
    Expert,
}

impl UserRole {
    /// Check if this role is the IT manager.
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Check if this role is an IT expert.
    pub fn is_expert(&self) -> bool {
        matches!(self, Self::Expert)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requester => "requester",
            Self::Manager => "manager",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = helpdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "requester" => Ok(Self::Requester),
            "manager" => Ok(Self::Manager),
            "expert" => Ok(Self::Expert),
            _ => Err(helpdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: requester, manager, expert"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert_eq!("EXPERT".parse::<UserRole>().unwrap(), UserRole::Expert);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::Manager.is_manager());
        assert!(!UserRole::Requester.is_manager());
        assert!(UserRole::Expert.is_expert());
        assert!(!UserRole::Manager.is_expert());
    }
}
