//! myshoes MCP server library.
//!
//! Exposes the target management API of a myshoes server (runner targets for
//! GitHub repositories and organizations) as Model Context Protocol tools:
//! `list_target`, `get_target`, `create_target`, `update_target` and
//! `delete_target`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transports
//! - **domains**
//!   - **targets**: data model and HTTP client for the myshoes `/target` API
//!   - **tools**: MCP tool definitions and the router that dispatches them
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use myshoes_mcp_server::core::{Config, McpServer, TransportService};
//! use myshoes_mcp_server::domains::targets::HttpTargetClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut config = Config::from_env();
//!     config.api.host = "http://localhost:8080".to_string();
//!     config.validate()?;
//!
//!     let client = HttpTargetClient::new(&config.api)?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config, Arc::new(client))).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
