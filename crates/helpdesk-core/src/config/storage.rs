//! File handoff storage configuration.

use serde::{Deserialize, Serialize};

/// Storage configuration for file handoff bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum accepted file size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_data_root() -> String {
    "data".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upload_cap_is_ten_megabytes() {
        let config = StorageConfig::default();
        assert_eq!(config.max_upload_size_bytes, 10 * 1024 * 1024);
    }
}
