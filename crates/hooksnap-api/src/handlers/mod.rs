//! HTTP request handlers.

pub mod data_exchange;
