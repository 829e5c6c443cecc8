//! Storage abstraction trait
//!
//! This module defines the Storage trait that artifact backends implement.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The capture pipeline writes snapshots, raw bodies and uploaded files through
/// this trait without knowing where they end up.
///
/// **Key format:** flat file names, see the crate root documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key`, replacing any existing artifact, and return its path
    async fn put(&self, key: &str, data: &[u8]) -> StorageResult<PathBuf>;

    /// Directory artifacts are written to
    fn root(&self) -> &Path;
}
