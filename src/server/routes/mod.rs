//! HTTP route modules
//!
//! Route handlers organized by functionality. Success payloads are plain
//! JSON encodings of the domain records; error statuses come from
//! [`crate::utils::error::GatewayError`].

pub mod batch;
pub mod health;
