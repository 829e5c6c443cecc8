//! Configuration validation
//!
//! Checks values that would only fail later, at bind time or on the first request.

use anyhow::Result;
use hooksnap_core::Config;

/// Reject configurations the server cannot run with.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server_port() == 0 {
        return Err(anyhow::anyhow!("PORT cannot be 0"));
    }

    if config.max_body_size_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_BODY_SIZE_MB cannot be 0"));
    }

    if config.upload_dir().as_os_str().is_empty() {
        return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
    }

    Ok(())
}

/// Log settings that are allowed but probably unintended.
///
/// Called after the subscriber is installed.
pub fn warn_on_risky_config(config: &Config) {
    if config.webhook_token().is_none() {
        if config.is_production() {
            tracing::warn!(
                "WEBHOOK_TOKEN is not set in production - every request will be accepted"
            );
        } else {
            tracing::info!("WEBHOOK_TOKEN not set, token check disabled");
        }
    }
}
