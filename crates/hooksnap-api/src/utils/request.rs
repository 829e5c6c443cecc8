//! Extraction of headers and form data from a buffered request.
//!
//! The body is read into memory once. Form parsing runs over a copy of that
//! buffer so the raw bytes survive for the `.raw` sidecar.

use std::collections::BTreeMap;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    Form,
};

use crate::services::capture::IncomingFile;

/// Form fields and file parts found in a request body, in arrival order.
#[derive(Debug, Default)]
pub struct FormCapture {
    pub fields: Vec<(String, String)>,
    pub files: Vec<IncomingFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    UrlEncoded,
    Multipart,
}

/// Copy every header into a name -> value map.
///
/// Names are lowercase; repeated headers keep the last value; non-UTF-8
/// values are decoded lossily.
pub fn capture_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut captured = BTreeMap::new();
    for (name, value) in headers {
        captured.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    captured
}

fn form_kind(headers: &HeaderMap) -> Option<FormKind> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let media_type = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match media_type.as_str() {
        "application/x-www-form-urlencoded" => Some(FormKind::UrlEncoded),
        "multipart/form-data" => Some(FormKind::Multipart),
        _ => None,
    }
}

/// Rebuild a request around an already-buffered body so axum's extractors can
/// parse it without consuming the original.
fn replay_request(parts: &Parts, body: Bytes) -> Request {
    let mut request = Request::new(Body::from(body));
    *request.method_mut() = parts.method.clone();
    *request.uri_mut() = parts.uri.clone();
    *request.headers_mut() = parts.headers.clone();
    // Carries the disabled DefaultBodyLimit so the replay is not capped again
    *request.extensions_mut() = parts.extensions.clone();
    request
}

/// Parse form fields and file parts out of the buffered body.
///
/// Never fails: a body that does not parse yields whatever was read before
/// the problem, and the problem is logged.
pub async fn read_form(parts: &Parts, body: &Bytes) -> FormCapture {
    if body.is_empty() {
        return FormCapture::default();
    }

    match form_kind(&parts.headers) {
        Some(FormKind::UrlEncoded) => read_urlencoded(parts, body).await,
        Some(FormKind::Multipart) => read_multipart(parts, body).await,
        None => FormCapture::default(),
    }
}

async fn read_urlencoded(parts: &Parts, body: &Bytes) -> FormCapture {
    let request = replay_request(parts, body.clone());
    match Form::<Vec<(String, String)>>::from_request(request, &()).await {
        Ok(Form(fields)) => FormCapture {
            fields,
            files: Vec::new(),
        },
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Ignoring unparseable urlencoded body");
            FormCapture::default()
        }
    }
}

async fn read_multipart(parts: &Parts, body: &Bytes) -> FormCapture {
    let request = replay_request(parts, body.clone());
    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Ignoring unparseable multipart body");
            return FormCapture::default();
        }
    };

    let mut capture = FormCapture::default();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fields = capture.fields.len(),
                    files = capture.files.len(),
                    "Stopped reading malformed multipart body"
                );
                break;
            }
        };

        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    field = %field_name,
                    "Stopped reading truncated multipart part"
                );
                break;
            }
        };

        // Parts with a filename parameter are files even when the filename is empty
        if file_name.is_some() {
            capture.files.push(IncomingFile {
                field_name,
                client_filename: file_name,
                content_type,
                data,
            });
        } else {
            capture
                .fields
                .push((field_name, String::from_utf8_lossy(&data).into_owned()));
        }
    }

    capture
}
