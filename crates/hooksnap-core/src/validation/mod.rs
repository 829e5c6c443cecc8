//! Input sanitization helpers.

pub mod filename;

pub use filename::{normalize_mime_type, sanitize_upload_name, secure_filename};
