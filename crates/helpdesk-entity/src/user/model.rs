//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A provisioned user of the helpdesk.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Workflow role (requester, manager, or expert).
    pub role: UserRole,
    /// Organizational unit (optional; nulled when the unit is removed).
    pub unit_id: Option<Uuid>,
    /// Office room number.
    pub room_number: Option<String>,
    /// Office phone number (8 digits).
    pub phone_number: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Contact fields a user may edit about themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Office room number.
    pub room_number: Option<String>,
    /// Office phone number; required, exactly 8 digits.
    pub phone_number: String,
}
