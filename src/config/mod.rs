//! Configuration management for the gateway
//!
//! This module handles loading and validation of gateway configuration.

pub mod models;

pub use models::{CorsConfig, GatewayConfig, ServerConfig, StorageConfig};

use std::path::Path;

use tracing::{debug, info};

use crate::utils::error::{GatewayError, Result};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Apply environment-variable overrides on top of the loaded values
    ///
    /// Recognized: `GATEWAY_HOST`, `GATEWAY_PORT`, `GATEWAY_SEED_FILE`.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(host) = std::env::var("GATEWAY_HOST") {
            self.gateway.server.host = host;
        }
        if let Ok(port) = std::env::var("GATEWAY_PORT") {
            self.gateway.server.port = port
                .parse()
                .map_err(|_| GatewayError::config(format!("Invalid GATEWAY_PORT: {}", port)))?;
        }
        if let Ok(seed) = std::env::var("GATEWAY_SEED_FILE") {
            self.gateway.storage.seed_file = Some(seed);
        }

        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.gateway.storage
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::config(format!("Server config error: {}", e)))?;
        Ok(())
    }
}
