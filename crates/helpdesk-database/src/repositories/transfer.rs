//! File transfer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_entity::transfer::FileTransfer;

/// Repository for one-shot file transfer records.
#[derive(Debug, Clone)]
pub struct TransferRepository {
    pool: PgPool,
}

impl TransferRepository {
    /// Create a new transfer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a newly uploaded transfer.
    pub async fn create(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        file_name: &str,
        file_path: &str,
    ) -> AppResult<FileTransfer> {
        sqlx::query_as::<_, FileTransfer>(
            "INSERT INTO file_transfers (sender_id, receiver_id, file_name, file_path) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(file_name)
        .bind(file_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create transfer", e))
    }

    /// Whether the sender already has an undownloaded transfer outstanding.
    pub async fn has_pending_outgoing(&self, sender_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM file_transfers \
             WHERE sender_id = $1 AND downloaded = FALSE)",
        )
        .bind(sender_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check pending transfers", e)
        })
    }

    /// Whether the receiver has anything waiting to download.
    pub async fn has_pending_incoming(&self, receiver_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM file_transfers \
             WHERE receiver_id = $1 AND downloaded = FALSE)",
        )
        .bind(receiver_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check incoming transfers", e)
        })
    }

    /// The receiver's oldest undownloaded transfer (FIFO delivery).
    pub async fn find_oldest_pending(&self, receiver_id: Uuid) -> AppResult<Option<FileTransfer>> {
        sqlx::query_as::<_, FileTransfer>(
            "SELECT * FROM file_transfers \
             WHERE receiver_id = $1 AND downloaded = FALSE \
             ORDER BY uploaded_at ASC LIMIT 1",
        )
        .bind(receiver_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find pending transfer", e)
        })
    }

    /// Flip a transfer to downloaded. Guarded so only the first of two
    /// racing downloads wins; returns whether this call won.
    pub async fn mark_downloaded(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE file_transfers SET downloaded = TRUE WHERE id = $1 AND downloaded = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark transfer downloaded", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
