//! Storage key generation.
//!
//! Keeps artifact naming in one place so the capture pipeline and the backend
//! agree on layout.

use uuid::Uuid;

use crate::traits::{StorageError, StorageResult};

/// Key of the JSON snapshot for a capture.
pub fn snapshot_key(snapshot_id: &str) -> String {
    format!("{}.json", snapshot_id)
}

/// Key of the raw-body sidecar for a capture.
pub fn raw_key(snapshot_id: &str) -> String {
    format!("{}.raw", snapshot_id)
}

/// Key for an uploaded file: random 32-char hex prefix plus the sanitized name.
///
/// The prefix keeps two uploads with the same client filename apart.
pub fn upload_key(sanitized_filename: &str) -> String {
    format!("{}-{}", Uuid::new_v4().simple(), sanitized_filename)
}

/// Reject keys that could escape the storage root.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if key == "." || key == ".." || key.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidKey(format!(
            "Storage key contains invalid characters: {}",
            key
        )));
    }
    Ok(())
}
