//! Wire types for the myshoes `/target` resource.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::InvalidResourceType;

/// Instance size tier for the runners of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Nano,
    Micro,
    Small,
    Medium,
    Large,
    XLarge,
    XLarge2,
    XLarge3,
    XLarge4,
}

impl ResourceType {
    /// Every tier, smallest first.
    pub const ALL: [ResourceType; 9] = [
        Self::Nano,
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::XLarge2,
        Self::XLarge3,
        Self::XLarge4,
    ];

    /// The literal used by the myshoes API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
            Self::XLarge2 => "2xlarge",
            Self::XLarge3 => "3xlarge",
            Self::XLarge4 => "4xlarge",
        }
    }

    /// Comma separated list of accepted literals, for error messages and schemas.
    pub fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = InvalidResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidResourceType(s.to_string()))
    }
}

impl Serialize for ResourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

/// Resource type as reported by the server.
///
/// Tiers outside [`ResourceType::ALL`] are kept verbatim so a single odd row
/// does not fail a whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportedResourceType {
    Known(ResourceType),
    Other(String),
}

impl ReportedResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(t) => t.as_str(),
            Self::Other(s) => s,
        }
    }
}

impl From<ResourceType> for ReportedResourceType {
    fn from(t: ResourceType) -> Self {
        Self::Known(t)
    }
}

impl PartialEq<ResourceType> for ReportedResourceType {
    fn eq(&self, other: &ResourceType) -> bool {
        matches!(self, Self::Known(t) if t == other)
    }
}

impl fmt::Display for ReportedResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target as returned by the myshoes API.
///
/// Fields the server adds beyond the ones named here are carried in `extra`
/// and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Server-assigned identifier, immutable once created.
    pub id: String,

    /// Repository (`owner/repo`) or organization the target applies to.
    pub scope: String,

    pub resource_type: ReportedResourceType,

    /// Shoes provider override; absent means the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,

    /// Lifecycle label assigned by the server.
    #[serde(default)]
    pub status: String,

    /// Why the target is in its current status, typically set on `err`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    /// Expiry of the GitHub token the server holds for this scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expired_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTargetParams {
    pub scope: String,
    pub resource_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_user: Option<String>,
}

/// Body of `POST /target/{id}`. Fields left as `None` are not sent and keep
/// their current remote value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTargetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
}

impl UpdateTargetParams {
    /// True when the update would not touch any field.
    pub fn is_empty(&self) -> bool {
        self.resource_type.is_none() && self.provider_url.is_none()
    }
}

/// Error body returned by the myshoes API.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}
