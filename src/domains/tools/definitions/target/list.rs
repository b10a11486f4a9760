//! List targets tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::targets::TargetClient;
use crate::domains::tools::definitions::common::{json_result, run_tool};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// The list tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListTargetInput {}

// ============================================================================
// Tool Definition
// ============================================================================

/// List tool - returns every target registered in myshoes.
pub struct ListTargetTool;

impl ListTargetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_target";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List targets from myshoes API. Returns a JSON array of targets.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        _input: &ListTargetInput,
        client: &dyn TargetClient,
    ) -> Result<CallToolResult, ToolError> {
        let targets = client.list_targets().await?;
        info!("Listed {} targets", targets.len());
        json_result(&targets)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListTargetInput>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let ct = call.request_context.ct.clone();
            let args = call.arguments.clone().unwrap_or_default();
            async move {
                let client = ctx.client.clone();
                run_tool(
                    Self::NAME,
                    &ctx,
                    args,
                    ct.cancelled(),
                    |input: ListTargetInput| async move {
                        Self::execute(&input, client.as_ref()).await
                    },
                )
                .await
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
