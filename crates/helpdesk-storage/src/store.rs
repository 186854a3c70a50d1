//! Filesystem-backed transfer payload store.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use helpdesk_core::error::{AppError, ErrorKind};
use helpdesk_core::result::AppResult;

/// Store for transfer payloads on the local filesystem.
///
/// Files are written under a UUID-prefixed relative path so two uploads
/// of the same filename never collide. The store only ever hands out
/// and accepts these relative paths.
#[derive(Debug, Clone)]
pub struct TransferStore {
    /// Root directory for all stored payloads.
    root: PathBuf,
}

impl TransferStore {
    /// Create a new store rooted at the given path, creating it if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative path to an absolute path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Whether the storage root is present and usable.
    pub async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    /// Write an uploaded payload. Returns the relative path to record
    /// alongside the transfer.
    pub async fn save(&self, file_name: &str, data: Bytes) -> AppResult<String> {
        let safe_name = sanitize_file_name(file_name);
        let path = format!("{}/{}", Uuid::new_v4(), safe_name);
        let full_path = self.resolve(&path);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Stored transfer payload");
        Ok(path)
    }

    /// Read a payload back in full.
    pub async fn read(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    /// Delete a payload. Deleting a missing file is a no-op.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path);
        if full_path.exists() {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete file: {path}"),
                    e,
                )
            })?;
            // Drop the per-upload directory too if it is now empty.
            if let Some(parent) = full_path.parent() {
                let _ = fs::remove_dir(parent).await;
            }
        }
        Ok(())
    }
}

/// Strip path separators and traversal components from a client-supplied
/// filename, keeping only the final component.
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim()
        .to_string();
    if base.is_empty() || base == "." || base == ".." {
        "unnamed".to_string()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_read_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = TransferStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from("quarterly report");
        let path = store.save("report.pdf", data.clone()).await.unwrap();
        assert!(path.ends_with("/report.pdf"));

        let read_back = store.read(&path).await.unwrap();
        assert_eq!(read_back, data);

        store.delete(&path).await.unwrap();
        let err = store.read(&path).await.unwrap_err();
        assert_eq!(err.kind, helpdesk_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_same_name_does_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = TransferStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let a = store.save("notes.txt", Bytes::from("first")).await.unwrap();
        let b = store.save("notes.txt", Bytes::from("second")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.read(&a).await.unwrap(), Bytes::from("first"));
        assert_eq!(store.read(&b).await.unwrap(), Bytes::from("second"));
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = TransferStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        store.delete("nope/missing.bin").await.unwrap();
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("dir\\notes.txt"), "notes.txt");
        assert_eq!(sanitize_file_name(".."), "unnamed");
        assert_eq!(sanitize_file_name(""), "unnamed");
    }
}
