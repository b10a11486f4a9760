//! Domain modules.
//!
//! - **targets**: the myshoes `/target` API: data model, errors and HTTP client
//! - **tools**: MCP tools that expose the target operations to clients

pub mod targets;
pub mod tools;
