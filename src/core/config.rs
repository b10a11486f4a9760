//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated from defaults, then environment variables (`MYSHOES_` prefix),
//! then command-line flags. It is built once at startup and shared read-only.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Prefix shared by every environment variable the server reads.
pub const ENV_PREFIX: &str = "MYSHOES_";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// myshoes API connection settings.
    pub api: ApiConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Log every tool request and response.
    pub log_commands: bool,
}

/// Connection settings for the myshoes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the myshoes server, e.g. `https://myshoes.example.com`.
    pub host: String,

    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl ApiConfig {
    /// API settings for `host` with the default user agent.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("myshoes-mcp-server/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "myshoes-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_commands: false,
            },
            api: ApiConfig::new(""),
            transport: TransportConfig::default(),
        }
    }
}

/// Read `MYSHOES_<name>`.
fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

/// Parse a boolean flag value the way shells usually spell it.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `MYSHOES_HOST`, `MYSHOES_ENABLE_COMMAND_LOGGING`,
    /// `MYSHOES_LOG_LEVEL`, `MYSHOES_SERVER_NAME` and the transport variables.
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(host) = env_var("HOST") {
            config.api.host = host;
        }

        if let Some(flag) = env_var("ENABLE_COMMAND_LOGGING") {
            config.logging.log_commands = parse_bool(&flag).unwrap_or(false);
        }

        if let Some(level) = env_var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(name) = env_var("SERVER_NAME") {
            config.server.name = name;
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Check that the configuration can be used to start the server.
    pub fn validate(&self) -> Result<()> {
        if self.api.host.trim().is_empty() {
            return Err(Error::config(format!(
                "host is required (use --host or set {}HOST)",
                ENV_PREFIX
            )));
        }
        info!("myshoes host: {}", self.api.host);
        Ok(())
    }
}
