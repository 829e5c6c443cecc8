//! Hooksnap Core Library
//!
//! This crate provides the configuration, error types, snapshot models and
//! filename sanitization shared by the storage and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{FieldValue, FileMetadata, Snapshot};
