//! Tools domain module.
//!
//! This module exposes the myshoes target API as MCP tools. Each call goes
//! through the same steps: decode and validate the arguments, call the
//! [`TargetClient`](crate::domains::targets::TargetClient), then encode the
//! result or map the failure to a protocol error.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder used by every transport
//! - `context.rs` - Read-only dependencies shared by all routes
//! - `error.rs` - Tool error taxonomy and protocol error mapping
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/target/` (e.g., `my_tool.rs`)
//! 2. Define the input struct, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it in `definitions/target/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`

mod context;
pub mod definitions;
mod error;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use router::{TOOL_NAMES, build_tool_router};
