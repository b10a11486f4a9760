//! Delete target tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::targets::TargetClient;
use crate::domains::tools::definitions::common::{require_target_id, run_tool, text_result};
use crate::domains::tools::{ToolContext, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the delete tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteTargetInput {
    /// ID of the target to delete.
    pub target_id: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Delete tool - removes a target.
pub struct DeleteTargetTool;

impl DeleteTargetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_target";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a target from myshoes API by its ID.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(target_id = %input.target_id))]
    pub async fn execute(
        input: &DeleteTargetInput,
        client: &dyn TargetClient,
    ) -> Result<CallToolResult, ToolError> {
        require_target_id(&input.target_id)?;

        client.delete_target(&input.target_id).await?;
        info!("Deleted target");
        Ok(text_result(format!(
            "Successfully deleted target {}",
            input.target_id
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeleteTargetInput>().into(),
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
                    |input: DeleteTargetInput| async move {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::targets::ResourceType;
    use crate::domains::targets::fake::FakeTargetClient;
    use crate::domains::tools::definitions::common::result_text;

    const ID: &str = "3c2b1a09-8f7e-4d6c-9b5a-4e3d2c1b0a99";

    fn input(id: &str) -> DeleteTargetInput {
        DeleteTargetInput {
            target_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_delete_message_names_the_id() {
        let client =
            FakeTargetClient::new().with_target(ID, "octocat/hello-world", ResourceType::Nano);

        let result = DeleteTargetTool::execute(&input(ID), &client).await.unwrap();
        assert!(result_text(&result).contains(ID));
        assert!(client.get(ID).is_none());
    }

    #[tokio::test]
    async fn test_repeat_delete_reports_not_found() {
        let client =
            FakeTargetClient::new().with_target(ID, "octocat/hello-world", ResourceType::Nano);

        DeleteTargetTool::execute(&input(ID), &client).await.unwrap();
        let err = DeleteTargetTool::execute(&input(ID), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_dot_id_never_reaches_client() {
        let client =
            FakeTargetClient::new().with_target(ID, "octocat/hello-world", ResourceType::Nano);

        let err = DeleteTargetTool::execute(&input(".."), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
        assert_eq!(client.calls(), 0);
        assert!(client.get(ID).is_some());
    }
}
