//! Data models for captured webhook deliveries.

pub mod field;
pub mod snapshot;

pub use field::FieldValue;
pub use snapshot::{body_preview, capture_timestamp, snapshot_id, FileMetadata, Snapshot};
