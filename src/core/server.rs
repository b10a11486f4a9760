//! MCP Server implementation.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed through the `ToolRouter` built in
//! `domains/tools/router.rs`; every route shares one [`ToolContext`].
//!
//! The server is cheap to clone. Each transport session gets its own clone,
//! all of them pointing at the same myshoes client and configuration.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::targets::TargetClient;
use crate::domains::tools::{ToolContext, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by the given myshoes client.
    pub fn new(config: Config, client: Arc<dyn TargetClient>) -> Self {
        let config = Arc::new(config);
        let ctx = ToolContext::new(client, config.clone());

        Self {
            tool_router: build_tool_router::<Self>(ctx),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Tools exposed by this server.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Manage myshoes targets. Use list_target and get_target to inspect targets, \
                 create_target to register a repository or organization, update_target to \
                 change its resource_type or provider_url, and delete_target to remove it."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
