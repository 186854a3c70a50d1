//! Assigned equipment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::inventory::{Hardware, Software};

/// Repository for the read-only equipment registry.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    /// Create a new inventory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hardware assigned to a user, ordered by title.
    pub async fn find_hardware_by_user(&self, user_id: Uuid) -> AppResult<Vec<Hardware>> {
        sqlx::query_as::<_, Hardware>(
            "SELECT * FROM hardware WHERE user_id = $1 ORDER BY title ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hardware", e))
    }

    /// Software assigned to a user, ordered by title.
    pub async fn find_software_by_user(&self, user_id: Uuid) -> AppResult<Vec<Software>> {
        sqlx::query_as::<_, Software>(
            "SELECT * FROM software WHERE user_id = $1 ORDER BY title ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list software", e))
    }
}
