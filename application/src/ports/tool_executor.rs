//! Query gateway port
//!
//! The use case hands every model-requested function call to this port and
//! feeds whatever comes back into the transcript.

use async_trait::async_trait;
use ims_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::ToolResult,
};

/// Executes catalog tools on behalf of the model.
///
/// `execute` has no error channel: unknown names, bad arguments and
/// data-access failures all come back as a failed [`ToolResult`] so the
/// model can read them and recover.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// The catalog this gateway answers for
    fn tool_spec(&self) -> &ToolSpec;

    /// Names in declaration order
    fn declared_names(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
