//! `CallerIdentity` extractor — resolves the `X-User-Id` header against
//! the users table and injects a `RequestContext`.
//!
//! Session handling lives outside this service; the upstream gateway is
//! trusted to set the header. This extractor only verifies the id names
//! a provisioned user and captures their current role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use helpdesk_core::error::AppError;
use helpdesk_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted caller context available in handlers.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub RequestContext);

impl CallerIdentity {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for CallerIdentity {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::validation("Missing X-User-Id header"))?;

        let user_id = header
            .parse::<Uuid>()
            .map_err(|_| AppError::validation("Invalid X-User-Id header"))?;

        let user = state
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::forbidden("Unknown user"))?;

        Ok(CallerIdentity(RequestContext::new(
            user.id,
            user.username,
            user.role,
        )))
    }
}
