//! Server builder and run_server function
//!
//! Provides the ServerBuilder for explicit configuration and the
//! run_server function for automatic configuration loading.

use tracing::info;

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting batch gateway");

    let config_path = "config/gateway.yaml";
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => config,
        Err(e) => {
            info!(
                "Configuration file loading failed, using default config: {}",
                e
            );
            Config::default()
        }
    };
    let config = config.with_env_overrides()?;

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/v2/Batch/all - All batches");
    info!("   GET  /api/v2/Batch/past/{{email}} - Past batches for a trainer");
    info!("   GET  /api/v2/Batch/future/{{email}} - Future batches for a trainer");
    info!("   GET  /api/v2/Batch/inprogress/{{email}} - First in-progress batch");
    info!("   GET  /api/v2/Batch/allinprogress/{{email}} - All in-progress batches");
    info!("   GET  /api/v2/Batch/byid/{{batch_id}} - Batch by id");
    info!("   POST /api/v2/Batch/updatebatch - Create or update a batch");
    info!("   GET  /api/v2/Batch/batchtypes - Batch types");
    info!("   GET  /api/v2/Batch/currentbatches - All batches in progress now");

    server.start().await
}
