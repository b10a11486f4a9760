//! Get target tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::targets::TargetClient;
use crate::domains::tools::definitions::common::{json_result, require_target_id, run_tool};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetTargetInput {
    /// ID of the target to fetch.
    pub target_id: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get tool - fetches a single target.
pub struct GetTargetTool;

impl GetTargetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_target";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a target from myshoes API by its ID.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(target_id = %input.target_id))]
    pub async fn execute(
        input: &GetTargetInput,
        client: &dyn TargetClient,
    ) -> Result<CallToolResult, ToolError> {
        require_target_id(&input.target_id)?;

        let target = client.get_target(&input.target_id).await?;
        info!("Fetched target for scope '{}'", target.scope);
        json_result(&target)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetTargetInput>().into(),
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
                    |input: GetTargetInput| async move {
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
