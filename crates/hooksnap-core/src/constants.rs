//! Constants shared across the workspace.

/// Maximum number of raw-body bytes included in a snapshot preview.
pub const PREVIEW_LIMIT_BYTES: usize = 2000;

/// Media type recorded for file parts that did not declare one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Stored name used when neither the client filename nor the field name survives sanitization.
pub const FALLBACK_UPLOAD_NAME: &str = "upload";

/// Length of the `<32 hex>-` prefix put in front of every stored upload name.
pub const UPLOAD_PREFIX_LENGTH: usize = 33;

/// Longest sanitized filename kept, in bytes.
///
/// The stored name is the prefix plus this, and must fit in a 255-byte
/// filesystem name.
pub const MAX_FILENAME_LENGTH: usize = 255 - UPLOAD_PREFIX_LENGTH;

/// Banner line opening each per-request log block.
pub const EVENT_BANNER: &str = "=== GeoPal Data Exchange Event ===";
