//! Organizational unit repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::unit::Unit;

/// Repository for organizational unit lookups.
#[derive(Debug, Clone)]
pub struct UnitRepository {
    pool: PgPool,
}

impl UnitRepository {
    /// Create a new unit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a unit by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Unit>> {
        sqlx::query_as::<_, Unit>("SELECT * FROM units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find unit by id", e)
            })
    }

    /// List all units, ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Unit>> {
        sqlx::query_as::<_, Unit>("SELECT * FROM units ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list units", e))
    }
}
