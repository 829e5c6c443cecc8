//! Application error taxonomy
//!
//! All request-level failures are unified under [`AppError`]. Each variant
//! describes its own HTTP presentation through [`ErrorMetadata`], so the API
//! crate only has to render what the error says about itself.

use std::io;

/// Level at which a rejected or failed request is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Malformed input the sender can fix
    Debug,
    /// Rejections worth noticing, e.g. a bad token
    Warn,
    /// Server-side failures
    Error,
}

/// How an error presents itself over HTTP.
pub trait ErrorMetadata {
    /// Response status
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Value of the `error` field in the response body
    fn client_message(&self) -> String;

    /// Whether details must never reach the client
    fn is_sensitive(&self) -> bool;

    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON encoding error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::Unauthorized(_) => (401, "UNAUTHORIZED", true, LogLevel::Warn),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            (500, "INTERNAL_ERROR", true, LogLevel::Error)
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Unauthorized(_) => "unauthorized".to_string(),
            AppError::InvalidInput(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "internal_error".to_string()
            }
        }
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }
}

impl AppError {
    /// Variant name, used as a log field
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Display text followed by every source in the chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_renders_fixed_message() {
        let err = AppError::Unauthorized("token mismatch".to_string());
        assert_eq!(err.http_status_code(), 401);
        assert_eq!(err.client_message(), "unauthorized");
        assert!(err.is_sensitive());
    }

    #[test]
    fn storage_failures_hide_paths_from_clients() {
        let err: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "/srv/uploads").into();
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert_eq!(err.client_message(), "internal_error");
        assert!(err.detailed_message().contains("/srv/uploads"));
    }

    #[test]
    fn detailed_message_includes_source_chain() {
        let err: AppError = anyhow::anyhow!("disk full").context("writing snapshot").into();
        let details = err.detailed_message();
        assert!(details.contains("Caused by"));
        assert_eq!(err.error_type(), "Internal");
    }
}
