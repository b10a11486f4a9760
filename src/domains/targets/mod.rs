//! Targets domain module.
//!
//! A target is a repository or organization that myshoes provisions
//! self-hosted runners for. This module holds the wire model and the client
//! used to manage targets through the myshoes HTTP API.
//!
//! - `model.rs` - `Target`, `ResourceType` and request bodies
//! - `client.rs` - `TargetClient` contract and its HTTP implementation
//! - `error.rs` - client error classification

mod client;
mod error;
mod model;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{HttpTargetClient, TargetClient, is_dot_segment};
pub use error::{InvalidResourceType, TargetError};
pub use model::{
    CreateTargetParams, ReportedResourceType, ResourceType, Target, UpdateTargetParams,
};
