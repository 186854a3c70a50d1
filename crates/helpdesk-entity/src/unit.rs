//! Organizational unit entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An organizational unit users and tickets belong to.
///
/// Deleting a unit nulls out references from users and tickets; it never
/// cascades.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Unit {
    /// Unique unit identifier.
    pub id: Uuid,
    /// Unit name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}
