//! Batch domain types and time-window classification

pub mod types;
pub mod window;

pub use types::{Batch, BatchType, Trainer};
