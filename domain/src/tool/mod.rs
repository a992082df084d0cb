//! Tool domain module
//!
//! This module defines the abstractions behind the assistant's **tool
//! catalog**: the fixed set of read-only inventory queries the remote model
//! may ask the assistant to run on its behalf.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)    │    │ (request)    │    │ (text/error) │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`] - ordered catalog of uniquely named definitions
//! - [`ToolDefinition`] - schema for a single tool (name, params, risk level)
//! - [`ToolCall`] - an invocation request parsed from a model reply
//! - [`ToolResult`] - execution outcome, always renderable to transcript text
//! - [`ToolValidator`] - pure check of required parameters
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for dispatch
//! - **Infrastructure** (`InventoryToolExecutor`): concrete handlers backed by
//!   the inventory repository

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
