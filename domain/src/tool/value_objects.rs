//! Tool domain value objects - immutable result and error types
//!
//! Every dispatch produces a [`ToolResult`]. Failures never escape as
//! Rust errors; they are carried as a [`ToolError`] and rendered into the
//! transcript as `{"error": "<message>"}` so the model can react to them.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `UNKNOWN_FUNCTION` | Name not in the dispatch table |
/// | `INVALID_ARGUMENT` | Missing or wrongly shaped parameter |
/// | `NOT_FOUND` | Requested record does not exist |
/// | `EXECUTION_FAILED` | Data access failed |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND")
    pub code: String,
    /// Message shown to the model verbatim
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unknown_function(name: &str) -> Self {
        Self::new("UNKNOWN_FUNCTION", format!("Unknown function: {}", name))
    }

    pub fn missing_parameter(param: &str) -> Self {
        Self::new("INVALID_ARGUMENT", format!("{} parameter is required", param))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
        }
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Render the result as the text inserted into the transcript.
    ///
    /// Successful output is passed through unchanged; failures become a
    /// JSON object `{"error": "<message>"}`.
    pub fn to_transcript_text(&self) -> String {
        match (&self.output, &self.error) {
            (_, Some(error)) => serde_json::json!({ "error": error.message }).to_string(),
            (Some(output), None) => output.clone(),
            (None, None) => String::new(),
        }
    }
}
