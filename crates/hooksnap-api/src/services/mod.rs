//! Application services.

pub mod capture;
