//! Dependencies shared by every tool route.

use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::targets::TargetClient;

/// Read-only state handed to each tool call.
///
/// Cloning is cheap; every clone points at the same client and config.
#[derive(Clone)]
pub struct ToolContext {
    pub client: Arc<dyn TargetClient>,
    pub config: Arc<Config>,
}

impl ToolContext {
    pub fn new(client: Arc<dyn TargetClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Whether each call's request and response should be logged.
    pub fn log_commands(&self) -> bool {
        self.config.logging.log_commands
    }
}
