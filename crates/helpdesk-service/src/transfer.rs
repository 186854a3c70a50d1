//! One-shot file handoff between users.
//!
//! A sender may have at most one undownloaded transfer outstanding.
//! Receiving is a destructive read: the bytes are buffered into memory,
//! the record is flipped to downloaded, and only then is the backing
//! file removed. A delete failure after that point leaks a file but can
//! never lose data, so it is logged and swallowed.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;
use helpdesk_database::repositories::transfer::TransferRepository;
use helpdesk_database::repositories::user::UserRepository;
use helpdesk_entity::transfer::FileTransfer;
use helpdesk_storage::TransferStore;

use crate::context::RequestContext;

/// A downloaded transfer payload with its original filename.
#[derive(Debug, Clone)]
pub struct ReceivedFile {
    /// Original filename, for the attachment header.
    pub file_name: String,
    /// The full payload.
    pub data: Bytes,
}

/// Serves the send and receive halves of the file handoff.
#[derive(Debug, Clone)]
pub struct TransferService {
    transfer_repo: Arc<TransferRepository>,
    user_repo: Arc<UserRepository>,
    store: Arc<TransferStore>,
    max_upload_size_bytes: u64,
}

impl TransferService {
    /// Creates a new transfer service.
    pub fn new(
        transfer_repo: Arc<TransferRepository>,
        user_repo: Arc<UserRepository>,
        store: Arc<TransferStore>,
        max_upload_size_bytes: u64,
    ) -> Self {
        Self {
            transfer_repo,
            user_repo,
            store,
            max_upload_size_bytes,
        }
    }

    /// Upload a file for another user to pick up.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        receiver_id: Uuid,
        file_name: &str,
        data: Bytes,
    ) -> AppResult<FileTransfer> {
        if receiver_id == ctx.user_id {
            return Err(AppError::validation("Cannot send a file to yourself"));
        }
        if file_name.trim().is_empty() {
            return Err(AppError::validation("A filename is required"));
        }
        if data.is_empty() {
            return Err(AppError::validation("The uploaded file is empty"));
        }
        if data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the {} byte upload limit",
                self.max_upload_size_bytes
            )));
        }

        self.user_repo
            .find_by_id(receiver_id)
            .await?
            .ok_or_else(|| AppError::validation("Unknown receiver"))?;

        if self.transfer_repo.has_pending_outgoing(ctx.user_id).await? {
            return Err(AppError::precondition_failed(
                "A previous transfer is still waiting to be downloaded",
            ));
        }

        let size = data.len();
        let path = self.store.save(file_name, data).await?;
        let transfer = self
            .transfer_repo
            .create(ctx.user_id, receiver_id, file_name, &path)
            .await?;

        info!(
            transfer_id = %transfer.id,
            sender_id = %ctx.user_id,
            receiver_id = %receiver_id,
            bytes = size,
            "Transfer uploaded"
        );
        Ok(transfer)
    }

    /// Download the caller's oldest pending transfer, destructively.
    ///
    /// A second call finds nothing: the record is already flipped and
    /// the backing file gone.
    pub async fn receive(&self, ctx: &RequestContext) -> AppResult<ReceivedFile> {
        let transfer = self
            .transfer_repo
            .find_oldest_pending(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("No files are waiting for you"))?;

        let data = self.store.read(&transfer.file_path).await.map_err(|e| {
            if e.kind == ErrorKind::NotFound {
                AppError::storage("The transferred file is no longer available")
            } else {
                e
            }
        })?;

        if !self.transfer_repo.mark_downloaded(transfer.id).await? {
            // Another download of the same transfer beat us to it.
            return Err(AppError::not_found("No files are waiting for you"));
        }

        if let Err(e) = self.store.delete(&transfer.file_path).await {
            warn!(
                transfer_id = %transfer.id,
                path = %transfer.file_path,
                error = %e,
                "Failed to delete downloaded transfer payload"
            );
        }

        info!(
            transfer_id = %transfer.id,
            receiver_id = %ctx.user_id,
            "Transfer downloaded and consumed"
        );
        Ok(ReceivedFile {
            file_name: transfer.file_name,
            data,
        })
    }

    /// Whether anything is waiting for the caller to download.
    pub async fn has_incoming(&self, ctx: &RequestContext) -> AppResult<bool> {
        self.transfer_repo.has_pending_incoming(ctx.user_id).await
    }
}
