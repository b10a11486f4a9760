//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod target;

pub use target::{
    CreateTargetInput, CreateTargetTool, DeleteTargetInput, DeleteTargetTool, GetTargetInput,
    GetTargetTool, ListTargetInput, ListTargetTool, UpdateTargetInput, UpdateTargetTool,
};
