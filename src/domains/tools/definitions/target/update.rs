//! Update target tool definition.
//!
//! Partial update: only fields that are supplied (and non-empty) are sent,
//! everything else keeps its current value on the server.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::domains::targets::{TargetClient, UpdateTargetParams};
use crate::domains::tools::definitions::common::{
    json_result, non_empty, optional_resource_type, require_target_id, run_tool,
};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the update tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTargetInput {
    /// ID of the target to update.
    pub target_id: String,

    /// New runner size. Omit to keep the current one.
    #[schemars(
        description = "New runner size: nano, micro, small, medium, large, xlarge, 2xlarge, 3xlarge or 4xlarge. Omit to keep the current value."
    )]
    #[serde(default)]
    pub resource_type: Option<String>,

    /// New shoes provider URL. Omit to keep the current one.
    #[serde(default)]
    pub provider_url: Option<String>,
}

impl UpdateTargetInput {
    /// Validate and normalize into the API request body.
    pub fn validate(self) -> Result<(String, UpdateTargetParams), ToolError> {
        require_target_id(&self.target_id)?;
        let resource_type = optional_resource_type(self.resource_type.as_deref())?;

        Ok((
            self.target_id,
            UpdateTargetParams {
                resource_type,
                provider_url: non_empty(self.provider_url),
            },
        ))
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Update tool - changes selected fields of a target.
pub struct UpdateTargetTool;

impl UpdateTargetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_target";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update a target in myshoes API. Only the supplied fields (resource_type, provider_url) are changed.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(target_id = %input.target_id))]
    pub async fn execute(
        input: &UpdateTargetInput,
        client: &dyn TargetClient,
    ) -> Result<CallToolResult, ToolError> {
        let (id, params) = input.clone().validate()?;
        if params.is_empty() {
            debug!("No fields supplied, update leaves target unchanged");
        }

        let target = client.update_target(&id, &params).await?;
        info!("Updated target {}", target.id);
        json_result(&target)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdateTargetInput>().into(),
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
                    |input: UpdateTargetInput| async move {
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
