//! Hooksnap Infrastructure Library
//!
//! Cross-cutting concerns shared by the binaries: tracing setup and HTTP middleware.

pub mod middleware;
pub mod telemetry;

pub use middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use telemetry::init_telemetry;
