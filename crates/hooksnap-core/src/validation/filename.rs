//! Client filename sanitization.

use crate::constants::{DEFAULT_MIME_TYPE, FALLBACK_UPLOAD_NAME, MAX_FILENAME_LENGTH};

/// Reduce a client-supplied filename to something safe to put on disk.
///
/// Directory components are dropped (both `/` and `\` count as separators),
/// whitespace runs become `_`, anything outside `[A-Za-z0-9._-]` is removed and
/// leading/trailing dots and underscores are trimmed. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let joined = basename.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .take(MAX_FILENAME_LENGTH)
        .collect();

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Name to store an uploaded part under.
///
/// Falls back to the field name when the client filename is missing or
/// sanitizes to nothing, then to a fixed name.
pub fn sanitize_upload_name(client_filename: Option<&str>, field_name: &str) -> String {
    let from_client = client_filename
        .filter(|name| !name.is_empty())
        .map(secure_filename)
        .unwrap_or_default();
    if !from_client.is_empty() {
        return from_client;
    }

    let from_field = secure_filename(field_name);
    if !from_field.is_empty() {
        return from_field;
    }

    FALLBACK_UPLOAD_NAME.to_string()
}

/// Lowercase a declared media type and strip its parameters
/// ("Text/Plain; charset=utf-8" -> "text/plain").
pub fn normalize_mime_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_ascii_lowercase()
}
