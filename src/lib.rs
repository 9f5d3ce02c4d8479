//! # Batch Gateway
//!
//! A small REST gateway for training-cohort batch records: listing batches,
//! filtering them by time window (past / future / in-progress) relative to a
//! trainer, id lookup, create/update, and batch type listings.
//!
//! The gateway itself is stateless; it delegates to the service interfaces
//! in [`services`] and only applies in-memory time-window filtering before
//! responding. Empty reads map to 204, rejected writes to 400.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use batch_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{Batch, BatchType, Trainer};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// A minimal gateway facade wrapping the HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting batch gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
