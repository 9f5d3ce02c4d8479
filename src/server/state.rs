//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::services::{BatchService, TrainerService};

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across threads.
/// The services are trait objects so any backing store can be plugged in.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Batch record service
    pub batches: Arc<dyn BatchService>,
    /// Trainer lookup service
    pub trainers: Arc<dyn TrainerService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        batches: Arc<dyn BatchService>,
        trainers: Arc<dyn TrainerService>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            batches,
            trainers,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
