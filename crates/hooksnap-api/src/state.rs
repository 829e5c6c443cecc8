//! Application state shared by all handlers.

use hooksnap_core::Config;

use crate::services::capture::CaptureService;

/// Built once at startup and handed to the router as `Arc<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub capture: CaptureService,
}
