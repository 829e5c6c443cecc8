//! Snapshot of a single webhook delivery.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::FieldValue;

/// Metadata recorded for one saved file part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Multipart field name the file arrived under
    pub fieldname: String,
    /// Sanitized client filename
    pub filename: String,
    /// Declared media type, parameters stripped
    pub mimetype: String,
    /// Bytes written to disk
    pub size: u64,
    /// Where the bytes were stored
    pub path: String,
}

/// Everything captured from one request.
///
/// Built once per request, written to `<id>.json`, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ts: String,
    pub headers: BTreeMap<String, String>,
    pub fields: BTreeMap<String, FieldValue>,
    pub files: Vec<FileMetadata>,
    pub preview: String,
}

impl Snapshot {
    /// Storage identifier derived from the capture timestamp.
    pub fn id(&self) -> String {
        snapshot_id(&self.ts)
    }
}

/// ISO-8601 UTC timestamp with microsecond precision and a `Z` suffix.
pub fn capture_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Turn a capture timestamp into a filesystem-safe identifier.
///
/// Two captures in the same microsecond produce the same id.
pub fn snapshot_id(ts: &str) -> String {
    ts.replace([':', '.'], "-")
}

/// Text preview of at most `limit` leading bytes, decoded lossily.
pub fn body_preview(raw: &[u8], limit: usize) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let end = raw.len().min(limit);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}
