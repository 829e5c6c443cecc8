//! Route configuration and setup.

mod health;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use hooksnap_core::Config;
use hooksnap_infra::request_id_middleware;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::constants::{DATA_EXCHANGE_PATH, HEALTH_PATH, ROOT_PATH};
use crate::handlers::data_exchange::receive_data_exchange;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let webhook_routes = Router::new()
        .route(DATA_EXCHANGE_PATH, post(receive_data_exchange))
        .route(ROOT_PATH, post(receive_data_exchange))
        .with_state(state);

    tracing::info!(
        max_body_bytes = config.max_body_size_bytes(),
        "Request body limit layer enabled"
    );

    Router::new()
        .route(HEALTH_PATH, get(health::health_check))
        .merge(webhook_routes)
        .layer(RequestBodyLimitLayer::new(config.max_body_size_bytes()))
        // The limit above is the only cap; axum's per-extractor default would be lower
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
}
