//! Errors raised by the myshoes API client.

use reqwest::StatusCode;
use thiserror::Error;

use super::model::ResourceType;

/// A resource type literal outside the supported tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resource_type '{0}' (expected one of: {accepted})", accepted = ResourceType::accepted())]
pub struct InvalidResourceType(pub String);

/// Errors that can occur while talking to the myshoes API.
#[derive(Debug, Error)]
pub enum TargetError {
    /// The referenced target does not exist.
    #[error("target not found: {0}")]
    NotFound(String),

    /// The API refused the request body.
    #[error("rejected by myshoes ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// The API answered with an unexpected status.
    #[error("myshoes returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The API could not be reached.
    #[error("failed to reach myshoes: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a body we could not decode.
    #[error("invalid response from myshoes: {0}")]
    Decode(String),

    /// The identifier cannot name a target (empty, `.` or `..`).
    #[error("invalid target id '{0}'")]
    InvalidId(String),

    /// Client construction failed.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl TargetError {
    /// Classify a non-success response.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Rejected { status, message }
            }
            _ => Self::Status { status, message },
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
