//! Collaborator service interfaces
//!
//! The gateway consumes these interfaces; it never talks to storage
//! directly. Any backing implementation can be plugged in through
//! [`crate::server::state::AppState`].

pub mod batch;
pub mod trainer;

pub use batch::BatchService;
pub use trainer::TrainerService;
