//! Domain layer for the IMS assistant
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tool Catalog
//!
//! A fixed set of read-only inventory queries, each described by a
//! [`ToolDefinition`], that the remote model may request by name.
//!
//! ## Transcript
//!
//! The ordered history of one chat invocation: the user's message followed
//! by pairs of model tool calls and their results. It lives only as long as
//! the invocation that created it.

pub mod conversation;
pub mod core;
pub mod inventory;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    ConversationTurn, ModelReply, ReplyPart, ReplyPartKind, ReplyShapeError, Transcript,
};
pub use core::error::DomainError;
pub use inventory::{Borrower, InventorySnapshot, Item, Loan, RecordId, Vendor};
pub use tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
