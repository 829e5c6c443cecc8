//! Storage setup and initialization

use std::sync::Arc;

use anyhow::{Context, Result};
use hooksnap_core::Config;
use hooksnap_storage::{LocalStorage, Storage};

/// Create the uploads directory if needed and return the storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(config.upload_dir())
        .await
        .with_context(|| {
            format!(
                "Failed to prepare upload directory {}",
                config.upload_dir().display()
            )
        })?;

    tracing::info!(upload_dir = %storage.root().display(), "Local storage initialized");

    Ok(Arc::new(storage))
}
