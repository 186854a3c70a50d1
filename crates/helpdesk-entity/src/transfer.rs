//! One-shot file transfer entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A one-shot file handoff between two users.
///
/// The backing bytes are deleted as soon as the receiver downloads them;
/// the record persists as history but no longer references a live file
/// once `downloaded` is true.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileTransfer {
    /// Unique transfer identifier.
    pub id: Uuid,
    /// The sending user.
    pub sender_id: Uuid,
    /// The receiving user.
    pub receiver_id: Uuid,
    /// Original filename, shown to the receiver.
    pub file_name: String,
    /// Relative path of the backing bytes in the transfer store.
    pub file_path: String,
    /// Whether the receiver has completed the destructive read.
    pub downloaded: bool,
    /// When the bytes were uploaded.
    pub uploaded_at: DateTime<Utc>,
}
