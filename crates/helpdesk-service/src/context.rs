//! Request context carrying the resolved caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_core::error::AppError;
use helpdesk_core::result::AppResult;
use helpdesk_entity::user::UserRole;

/// Context for the current request.
///
/// Extracted by the API layer and passed into service methods so that
/// every operation knows *who* is acting and in which role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The calling user's ID.
    pub user_id: Uuid,
    /// The calling user's username.
    pub username: String,
    /// The calling user's workflow role.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String, role: UserRole) -> Self {
        Self {
            user_id,
            username,
            role,
            request_time: Utc::now(),
        }
    }

    /// Errors with `Forbidden` unless the caller is a requester.
    pub fn require_requester(&self) -> AppResult<()> {
        match self.role {
            UserRole::Requester => Ok(()),
            _ => Err(AppError::forbidden("Requester role required")),
        }
    }

    /// Errors with `Forbidden` unless the caller is a manager.
    pub fn require_manager(&self) -> AppResult<()> {
        match self.role {
            UserRole::Manager => Ok(()),
            _ => Err(AppError::forbidden("Manager role required")),
        }
    }

    /// Errors with `Forbidden` unless the caller is an expert.
    pub fn require_expert(&self) -> AppResult<()> {
        match self.role {
            UserRole::Expert => Ok(()),
            _ => Err(AppError::forbidden("Expert role required")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::error::ErrorKind;

    fn ctx(role: UserRole) -> RequestContext {
        RequestContext::new(Uuid::new_v4(), "sami".to_string(), role)
    }

    #[test]
    fn test_role_requirements() {
        assert!(ctx(UserRole::Manager).require_manager().is_ok());
        assert!(ctx(UserRole::Expert).require_expert().is_ok());
        assert!(ctx(UserRole::Requester).require_requester().is_ok());

        let err = ctx(UserRole::Requester).require_manager().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        let err = ctx(UserRole::Manager).require_expert().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
