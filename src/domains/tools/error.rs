//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

use crate::domains::targets::{InvalidResourceType, TargetError};

/// Errors that can occur while handling a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Caller input failed a local check. No request was sent.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The referenced target does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// myshoes refused the request.
    #[error("Rejected by myshoes: {0}")]
    Rejected(String),

    /// myshoes could not be reached or failed unexpectedly.
    #[error("myshoes request failed: {0}")]
    Transport(String),

    /// A successful result could not be serialized.
    #[error("Failed to encode result: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The caller cancelled the request.
    #[error("Request cancelled")]
    Cancelled,
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Rejected(_) => "rejected",
            Self::Transport(_) => "transport",
            Self::Encoding(_) => "encoding",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<TargetError> for ToolError {
    fn from(err: TargetError) -> Self {
        match err {
            TargetError::NotFound(_) => Self::NotFound(err.to_string()),
            TargetError::Rejected { .. } => Self::Rejected(err.to_string()),
            TargetError::InvalidId(_) => Self::Validation(err.to_string()),
            TargetError::Status { .. }
            | TargetError::Transport(_)
            | TargetError::Decode(_)
            | TargetError::Config(_) => Self::Transport(err.to_string()),
        }
    }
}

impl From<InvalidResourceType> for ToolError {
    fn from(err: InvalidResourceType) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let data = Some(json!({ "kind": err.kind() }));
        let message = err.to_string();
        match err {
            ToolError::Validation(_) | ToolError::Rejected(_) => {
                McpError::invalid_params(message, data)
            }
            ToolError::NotFound(_) => McpError::resource_not_found(message, data),
            ToolError::Transport(_) | ToolError::Encoding(_) | ToolError::Cancelled => {
                McpError::internal_error(message, data)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_target_errors_keep_their_class() {
        let not_found: ToolError = TargetError::NotFound("target not found".into()).into();
        assert!(matches!(not_found, ToolError::NotFound(_)));

        let rejected: ToolError = TargetError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "scope must be set".into(),
        }
        .into();
        assert!(matches!(rejected, ToolError::Rejected(_)));
        assert!(rejected.to_string().contains("scope must be set"));

        let server: ToolError = TargetError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream".into(),
        }
        .into();
        assert!(matches!(server, ToolError::Transport(_)));

        let bad_id: ToolError = TargetError::InvalidId("..".into()).into();
        assert!(matches!(bad_id, ToolError::Validation(_)));
    }

    #[test]
    fn test_mcp_error_codes() {
        let err: McpError = ToolError::validation("scope is required").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data, Some(json!({ "kind": "validation" })));
        assert!(err.message.contains("scope is required"));

        let err: McpError = ToolError::NotFound("target not found: x".into()).into();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);

        let err: McpError = ToolError::Transport("connection refused".into()).into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("connection refused"));
    }
}
