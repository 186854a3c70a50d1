//! Hardware and software inventory reference data.
//!
//! Read-only records attached to a user, surfaced on the requester
//! dashboard. No behavior.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hardware asset registered to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hardware {
    /// Unique record identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Asset title.
    pub title: String,
    /// Model designation.
    pub model: String,
    /// Brand name.
    pub brand: String,
    /// Asset inventory number.
    pub asset_number: String,
}

/// A software installation registered to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Software {
    /// Unique record identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Software title.
    pub title: String,
    /// Installed version.
    pub version: String,
    /// Vendor name.
    pub vendor: String,
}
