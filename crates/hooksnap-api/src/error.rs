//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Anything that
//! converts into `AppError` becomes an `HttpAppError` via `?` and renders
//! consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hooksnap_core::{AppError, ErrorMetadata, LogLevel};
use hooksnap_storage::StorageError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Machine-readable error code, omitted for sensitive errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: IntoResponse and AppError both live in other crates)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Map a storage failure onto the application taxonomy.
pub fn storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::InvalidKey(msg) => {
            AppError::Internal(format!("Invalid storage key: {}", msg))
        }
        other => AppError::Storage(other.to_string()),
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error.detailed_message(),
                error_type = error_type,
                "Request failed"
            );
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Sensitive errors render only the fixed client message
        let body = if app_error.is_sensitive() {
            ErrorResponse {
                error: app_error.client_message(),
                details: None,
                code: None,
            }
        } else {
            ErrorResponse {
                error: app_error.client_message(),
                details: Some(app_error.detailed_message()),
                code: Some(app_error.error_code().to_string()),
            }
        };

        (status, Json(body)).into_response()
    }
}
