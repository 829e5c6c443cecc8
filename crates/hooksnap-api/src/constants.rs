//! Route paths served by the receiver.

/// Webhook endpoint registered with the field-service platform
pub const DATA_EXCHANGE_PATH: &str = "/geopal/data-exchange";

/// Catch-all alias for senders configured with the bare host
pub const ROOT_PATH: &str = "/";

pub const HEALTH_PATH: &str = "/health";

/// Query parameter carrying the shared secret
pub const TOKEN_QUERY_PARAM: &str = "token";
