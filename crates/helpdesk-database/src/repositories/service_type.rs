//! Service type repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::service_type::ServiceType;

/// Repository for service type lookups.
#[derive(Debug, Clone)]
pub struct ServiceTypeRepository {
    pool: PgPool,
}

impl ServiceTypeRepository {
    /// Create a new service type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a service type by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ServiceType>> {
        sqlx::query_as::<_, ServiceType>("SELECT * FROM service_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find service type by id", e)
            })
    }

    /// List all service types, ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<ServiceType>> {
        sqlx::query_as::<_, ServiceType>("SELECT * FROM service_types ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list service types", e)
            })
    }
}
