//! Delivery capture service
//!
//! Turns one accepted request into stored artifacts:
//! fields → preview → files → snapshot JSON → raw sidecar → log block.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use hooksnap_core::constants::{EVENT_BANNER, PREVIEW_LIMIT_BYTES};
use hooksnap_core::models::{body_preview, capture_timestamp};
use hooksnap_core::validation::{normalize_mime_type, sanitize_upload_name};
use hooksnap_core::{AppError, FieldValue, FileMetadata, Snapshot};
use hooksnap_storage::{keys, Storage};

use crate::error::storage_error;

/// A file part as received, before it is stored.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub field_name: String,
    pub client_filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Everything read off the wire for one request.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub received_at: DateTime<Utc>,
    pub headers: BTreeMap<String, String>,
    /// Form fields in arrival order; repeated names are allowed
    pub fields: Vec<(String, String)>,
    pub files: Vec<IncomingFile>,
    pub raw_body: Bytes,
}

/// Result of a successful capture.
#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    pub snapshot: Snapshot,
    pub meta_path: PathBuf,
    /// `None` when the request had no body
    pub raw_path: Option<PathBuf>,
}

/// Persists request snapshots through a [`Storage`] backend.
#[derive(Clone)]
pub struct CaptureService {
    storage: Arc<dyn Storage>,
    decode_json_fields: bool,
}

impl CaptureService {
    pub fn new(storage: Arc<dyn Storage>, decode_json_fields: bool) -> Self {
        Self {
            storage,
            decode_json_fields,
        }
    }

    /// Store uploaded files, the snapshot and the raw body, then log the event.
    ///
    /// Any storage failure aborts the capture. Files written before the
    /// failure are left where they are.
    pub async fn capture(&self, request: CapturedRequest) -> Result<CaptureOutcome, AppError> {
        let ts = capture_timestamp(request.received_at);
        let fields = self.build_fields(request.fields);
        let preview = body_preview(&request.raw_body, PREVIEW_LIMIT_BYTES);

        let mut files = Vec::with_capacity(request.files.len());
        for file in request.files {
            files.push(self.store_file(file).await?);
        }

        let snapshot = Snapshot {
            ts,
            headers: request.headers,
            fields,
            files,
            preview,
        };
        let snapshot_id = snapshot.id();
        let snapshot_json = serde_json::to_string_pretty(&snapshot)?;

        let meta_path = self
            .storage
            .put(&keys::snapshot_key(&snapshot_id), snapshot_json.as_bytes())
            .await
            .map_err(storage_error)?;

        let raw_path = if request.raw_body.is_empty() {
            None
        } else {
            Some(
                self.storage
                    .put(&keys::raw_key(&snapshot_id), &request.raw_body)
                    .await
                    .map_err(storage_error)?,
            )
        };

        let raw_display = raw_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());

        tracing::info!("{}", EVENT_BANNER);
        tracing::info!("{}", snapshot_json);
        tracing::info!(
            snapshot_id = %snapshot_id,
            files = snapshot.files.len(),
            raw_bytes = request.raw_body.len(),
            "Saved meta: {} raw: {}",
            meta_path.display(),
            raw_display
        );

        Ok(CaptureOutcome {
            snapshot,
            meta_path,
            raw_path,
        })
    }

    /// First occurrence of a field name wins.
    fn build_fields(&self, raw_fields: Vec<(String, String)>) -> BTreeMap<String, FieldValue> {
        let mut fields = BTreeMap::new();
        for (name, value) in raw_fields {
            if fields.contains_key(&name) {
                continue;
            }
            let value = if self.decode_json_fields {
                FieldValue::decode(&value)
            } else {
                FieldValue::text(value)
            };
            fields.insert(name, value);
        }
        fields
    }

    async fn store_file(&self, file: IncomingFile) -> Result<FileMetadata, AppError> {
        let filename = sanitize_upload_name(file.client_filename.as_deref(), &file.field_name);
        let key = keys::upload_key(&filename);

        let path = self
            .storage
            .put(&key, &file.data)
            .await
            .map_err(storage_error)?;

        Ok(FileMetadata {
            fieldname: file.field_name,
            filename,
            mimetype: normalize_mime_type(file.content_type.as_deref()),
            size: file.data.len() as u64,
            path: path.display().to_string(),
        })
    }
}
