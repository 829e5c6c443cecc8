//! Liveness probe.

use axum::{http::StatusCode, response::IntoResponse};

/// Always `200 OK` with a plain-text body. Touches neither auth nor storage.
pub(super) async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
