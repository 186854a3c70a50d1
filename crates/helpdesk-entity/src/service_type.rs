//! Service type reference data.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A categorization tag for tickets. Carries no behavior.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceType {
    /// Unique service type identifier.
    pub id: Uuid,
    /// Service type name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}
