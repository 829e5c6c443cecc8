//! Request-reading helpers used by the handlers.

pub mod request;
