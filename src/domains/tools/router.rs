//! Tool Router - builds the rmcp ToolRouter for the target tools.
//!
//! The router maps each tool name to its handler. Unknown names are rejected
//! by rmcp before any handler runs.

use rmcp::handler::server::tool::ToolRouter;

use super::ToolContext;
use super::definitions::{
    CreateTargetTool, DeleteTargetTool, GetTargetTool, ListTargetTool, UpdateTargetTool,
};

/// Names of every registered tool.
pub const TOOL_NAMES: [&str; 5] = [
    ListTargetTool::NAME,
    GetTargetTool::NAME,
    CreateTargetTool::NAME,
    UpdateTargetTool::NAME,
    DeleteTargetTool::NAME,
];

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListTargetTool::create_route(ctx.clone()))
        .with_route(GetTargetTool::create_route(ctx.clone()))
        .with_route(CreateTargetTool::create_route(ctx.clone()))
        .with_route(UpdateTargetTool::create_route(ctx.clone()))
        .with_route(DeleteTargetTool::create_route(ctx))
}
