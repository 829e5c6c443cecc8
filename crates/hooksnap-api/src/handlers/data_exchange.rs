//! Webhook ingest handler for field-service data-exchange deliveries.

use std::error::Error as StdError;
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::Uri,
    Json,
};
use chrono::Utc;
use hooksnap_core::AppError;
use http_body_util::LengthLimitError;
use serde::Serialize;

use crate::auth::verify_token;
use crate::constants::TOKEN_QUERY_PARAM;
use crate::error::HttpAppError;
use crate::services::capture::CapturedRequest;
use crate::state::AppState;
use crate::utils::request::{capture_headers, read_form};

/// Fixed acknowledgment returned for every captured delivery.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: &'static str,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Capture one delivery and acknowledge it.
///
/// Registered on both the data-exchange path and `/`.
pub async fn receive_data_exchange(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<AckResponse>, HttpAppError> {
    let token = token_from_query(request.uri());
    verify_token(state.config.webhook_token(), token.as_deref())?;

    let received_at = Utc::now();
    let (parts, body) = request.into_parts();
    let headers = capture_headers(&parts.headers);

    // Size is already capped by the body limit layer
    let raw_body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(body_read_error)?;

    let form = read_form(&parts, &raw_body).await;

    state
        .capture
        .capture(CapturedRequest {
            received_at,
            headers,
            fields: form.fields,
            files: form.files,
            raw_body,
        })
        .await?;

    Ok(Json(AckResponse::ok()))
}

/// First `token` value in the query string.
///
/// Later repeats are ignored. An unparseable query string carries no token.
fn token_from_query(uri: &Uri) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value)
}

/// A body cut off by the limit layer is a 413; anything else is a broken request.
fn body_read_error(err: axum::Error) -> AppError {
    let mut source = Some(&err as &(dyn StdError + 'static));
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return AppError::PayloadTooLarge("Request body exceeds the size limit".to_string());
        }
        source = current.source();
    }
    AppError::InvalidInput(format!("Failed to read request body: {}", err))
}
