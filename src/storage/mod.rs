//! Storage backends for the gateway
//!
//! The gateway only depends on the service traits in [`crate::services`];
//! this module provides the in-memory implementation the binary runs with.

pub mod memory;

pub use memory::{MemoryStore, SeedData};
