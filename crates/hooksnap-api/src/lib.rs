//! Hooksnap API Library
//!
//! HTTP handlers, capture pipeline and application setup for the webhook receiver.

// Module declarations
mod handlers;
mod utils;

// Public modules
pub mod auth;
pub mod constants;
pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::capture::{CaptureOutcome, CaptureService, CapturedRequest, IncomingFile};
pub use state::AppState;
