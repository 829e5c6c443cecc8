//! Application setup and initialization
//!
//! Startup wiring lives here so tests can build the same router without
//! installing a global subscriber or binding a socket.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use hooksnap_core::Config;

use crate::services::capture::CaptureService;
use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    validation::validate_config(&config).context("Configuration validation failed")?;

    hooksnap_infra::init_telemetry(config.log_format())
        .context("Failed to initialize telemetry")?;

    validation::warn_on_risky_config(&config);
    tracing::info!(
        environment = %config.environment,
        "Configuration loaded and validated successfully"
    );

    build_app(config).await
}

/// Build state and router from a validated config.
pub async fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let storage = storage::setup_storage(&config).await?;
    let capture = CaptureService::new(storage, config.decode_json_fields());

    let state = Arc::new(AppState { config, capture });
    let router = routes::setup_routes(&state.config, state.clone());

    Ok((state, router))
}
