//! Common utilities shared across target tools.
//!
//! This module provides argument decoding and validation, result encoding,
//! and the per-call pipeline every route runs through:
//! decode arguments, run the handler (racing cancellation), log, map errors.

use std::future::Future;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::domains::targets::{ResourceType, is_dot_segment};
use crate::domains::tools::{ToolContext, ToolError};

/// Decode the raw argument object into a tool's parameter struct.
pub fn parse_params<P: DeserializeOwned>(args: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::validation(e.to_string()))
}

/// Fail unless `value` has non-whitespace content.
pub fn require(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Fail unless `value` can name a target: non-empty and not `.` or `..`.
pub fn require_target_id(value: &str) -> Result<(), ToolError> {
    require("target_id", value)?;
    if is_dot_segment(value.trim()) {
        return Err(ToolError::validation(format!(
            "target_id '{}' is not a valid identifier",
            value
        )));
    }
    Ok(())
}

/// Treat an empty string the same as an omitted field.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Strictly decode a resource type literal.
pub fn resource_type(value: &str) -> Result<ResourceType, ToolError> {
    Ok(value.parse::<ResourceType>()?)
}

/// Decode an optional resource type; empty means "not supplied".
pub fn optional_resource_type(value: Option<&str>) -> Result<Option<ResourceType>, ToolError> {
    match value {
        Some(v) if !v.is_empty() => resource_type(v).map(Some),
        _ => Ok(None),
    }
}

/// Encode a value as a single JSON text payload.
pub fn json_result<T: Serialize + ?Sized>(value: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string(value)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Create a success result with text content.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Run one tool call end to end.
///
/// The handler is dropped, aborting any in-flight HTTP request, if
/// `cancelled` resolves first.
pub async fn run_tool<P, F, Fut, C>(
    name: &'static str,
    ctx: &ToolContext,
    args: JsonObject,
    cancelled: C,
    handler: F,
) -> Result<CallToolResult, McpError>
where
    P: DeserializeOwned,
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = Result<CallToolResult, ToolError>>,
    C: Future<Output = ()>,
{
    if ctx.log_commands() {
        info!(tool = name, arguments = %serde_json::Value::Object(args.clone()), "Tool request");
    }

    let outcome = match parse_params::<P>(args) {
        Ok(params) => {
            tokio::select! {
                _ = cancelled => Err(ToolError::Cancelled),
                result = handler(params) => result,
            }
        }
        Err(e) => Err(e),
    };

    finish(name, ctx, outcome)
}

/// Log the outcome of a call and convert failures to protocol errors.
pub fn finish(
    name: &'static str,
    ctx: &ToolContext,
    outcome: Result<CallToolResult, ToolError>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(result) => {
            if ctx.log_commands() {
                log_response(name, &result);
            }
            Ok(result)
        }
        Err(e) => {
            warn!(tool = name, kind = e.kind(), "Tool call failed: {}", e);
            Err(e.into())
        }
    }
}

fn log_response<T: Serialize>(name: &'static str, response: &T) {
    match serde_json::to_string(response) {
        Ok(response) => info!(tool = name, %response, "Tool response"),
        Err(e) => warn!(tool = name, "Tool response could not be encoded for logging: {}", e),
    }
}

/// Text of the first content item, for assertions.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
