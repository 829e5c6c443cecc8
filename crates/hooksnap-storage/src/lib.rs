//! Hooksnap Storage Library
//!
//! This crate provides the storage abstraction for captured deliveries and
//! the local upload-directory implementation.
//!
//! # Storage key format
//!
//! All artifacts live flat in one directory, so keys are bare file names:
//!
//! - **Snapshot**: `{snapshot_id}.json`
//! - **Raw body sidecar**: `{snapshot_id}.raw`
//! - **Uploaded file**: `{32 hex chars}-{sanitized filename}`
//!
//! Keys are single path components: no separators, and never `.` or `..`.
//! Key generation is centralized in the `keys` module.

pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
