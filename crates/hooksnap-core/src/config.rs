//! Configuration module
//!
//! Process-wide settings are read once at startup into a [`Config`] and passed
//! explicitly to whatever needs them. Nothing reads the environment after that.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

// Common constants
const SERVER_PORT: u16 = 5000;
const UPLOAD_DIR: &str = "uploads";
const MAX_BODY_SIZE_MB: usize = 50;
const ENVIRONMENT: &str = "development";

/// Output format of the tracing subscriber
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "Unknown LOG_FORMAT '{}'. Expected 'pretty' or 'json'",
                other
            )),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Shared secret expected in the `token` query parameter. `None` disables the check.
    pub webhook_token: Option<String>,
    pub upload_dir: PathBuf,
    pub max_body_size_bytes: usize,
    pub decode_json_fields: bool,
    pub environment: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: SERVER_PORT,
            webhook_token: None,
            upload_dir: PathBuf::from(UPLOAD_DIR),
            max_body_size_bytes: MAX_BODY_SIZE_MB * 1024 * 1024,
            decode_json_fields: true,
            environment: ENVIRONMENT.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => SERVER_PORT,
        };

        // Only an empty value disables the check; whitespace is a valid secret
        let webhook_token = lookup("WEBHOOK_TOKEN").filter(|token| !token.is_empty());

        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(UPLOAD_DIR));

        let max_body_size_mb = match lookup("MAX_BODY_SIZE_MB") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("MAX_BODY_SIZE_MB must be a whole number, got '{}'", raw)
            })?,
            None => MAX_BODY_SIZE_MB,
        };

        let decode_json_fields = match lookup("DECODE_JSON_FIELDS") {
            Some(raw) => parse_bool(&raw).with_context(|| {
                format!("DECODE_JSON_FIELDS must be true or false, got '{}'", raw)
            })?,
            None => true,
        };

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| ENVIRONMENT.to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Config {
            server_port,
            webhook_token,
            upload_dir,
            max_body_size_bytes: max_body_size_mb.saturating_mul(1024 * 1024),
            decode_json_fields,
            environment,
            log_format,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn webhook_token(&self) -> Option<&str> {
        self.webhook_token.as_deref()
    }

    pub fn upload_dir(&self) -> &std::path::Path {
        &self.upload_dir
    }

    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_bytes
    }

    pub fn decode_json_fields(&self) -> bool {
        self.decode_json_fields
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_port(), 5000);
        assert_eq!(config.webhook_token(), None);
        assert_eq!(config.upload_dir(), std::path::Path::new("uploads"));
        assert_eq!(config.max_body_size_bytes(), 50 * 1024 * 1024);
        assert!(config.decode_json_fields());
        assert_eq!(config.log_format(), LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn empty_token_disables_authorization() {
        let config = config_from(&[("WEBHOOK_TOKEN", "")]).unwrap();
        assert_eq!(config.webhook_token(), None);

        let config = config_from(&[("WEBHOOK_TOKEN", "secret")]).unwrap();
        assert_eq!(config.webhook_token(), Some("secret"));
    }

    #[test]
    fn token_is_kept_verbatim() {
        let config = config_from(&[("WEBHOOK_TOKEN", " padded ")]).unwrap();
        assert_eq!(config.webhook_token(), Some(" padded "));
    }

    #[test]
    fn whitespace_token_still_requires_a_token() {
        let config = config_from(&[("WEBHOOK_TOKEN", "  ")]).unwrap();
        assert_eq!(config.webhook_token(), Some("  "));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("UPLOAD_DIR", "/tmp/hooks"),
            ("MAX_BODY_SIZE_MB", "2"),
            ("DECODE_JSON_FIELDS", "off"),
            ("APP_ENV", "prod"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.server_port(), 8080);
        assert_eq!(config.upload_dir(), std::path::Path::new("/tmp/hooks"));
        assert_eq!(config.max_body_size_bytes(), 2 * 1024 * 1024);
        assert!(!config.decode_json_fields());
        assert!(config.is_production());
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[test]
    fn environment_takes_precedence_over_app_env() {
        let config =
            config_from(&[("ENVIRONMENT", "staging"), ("APP_ENV", "production")]).unwrap();
        assert_eq!(config.environment, "staging");
        assert!(!config.is_production());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
        assert!(config_from(&[("DECODE_JSON_FIELDS", "maybe")]).is_err());
    }
}
