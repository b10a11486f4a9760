//! Create target tool definition.
//!
//! Registers a repository or organization with myshoes. Optional fields that
//! are omitted (or empty) are left out of the request so the server applies
//! its own defaults.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::targets::{CreateTargetParams, TargetClient};
use crate::domains::tools::definitions::common::{
    json_result, non_empty, require, resource_type, run_tool,
};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTargetInput {
    /// Repository (`owner/repo`) or organization name.
    pub scope: String,

    /// Runner size.
    #[schemars(
        description = "Runner size: nano, micro, small, medium, large, xlarge, 2xlarge, 3xlarge or 4xlarge"
    )]
    pub resource_type: String,

    /// Shoes provider URL. Omit to use the server default.
    #[serde(default)]
    pub provider_url: Option<String>,

    /// User that runs the runner process. Omit to use the server default.
    #[serde(default)]
    pub runner_user: Option<String>,
}

impl CreateTargetInput {
    /// Validate and normalize into the API request body.
    pub fn validate(self) -> Result<CreateTargetParams, ToolError> {
        require("scope", &self.scope)?;
        require("resource_type", &self.resource_type)?;
        let resource_type = resource_type(&self.resource_type)?;

        Ok(CreateTargetParams {
            scope: self.scope,
            resource_type,
            provider_url: non_empty(self.provider_url),
            runner_user: non_empty(self.runner_user),
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create tool - registers a new target.
pub struct CreateTargetTool;

impl CreateTargetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_target";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a target in myshoes API. Requires scope and resource_type; provider_url and runner_user are optional.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(scope = %input.scope))]
    pub async fn execute(
        input: &CreateTargetInput,
        client: &dyn TargetClient,
    ) -> Result<CallToolResult, ToolError> {
        let params = input.clone().validate()?;

        let target = client.create_target(&params).await?;
        info!("Created target {}", target.id);
        json_result(&target)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateTargetInput>().into(),
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
                    |input: CreateTargetInput| async move {
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
