//! Chat progress notification port
//!
//! Lets the presentation layer observe the tool loop without the use case
//! knowing how progress is displayed.

use ims_domain::{ToolCall, ToolResult};

/// Callback for progress updates during a chat invocation
///
/// All methods default to no-ops.
pub trait ChatProgressNotifier: Send + Sync {
    /// Called before each request to the model (1-based round).
    fn on_round_start(&self, _round: usize, _max_rounds: usize) {}

    /// Called when the model requests a tool.
    fn on_tool_call(&self, _round: usize, _call: &ToolCall) {}

    /// Called with the gateway's result for that tool.
    fn on_tool_result(&self, _round: usize, _result: &ToolResult) {}

    /// Called once the invocation has produced its response.
    fn on_complete(&self, _rounds: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoChatProgress;

impl ChatProgressNotifier for NoChatProgress {}
