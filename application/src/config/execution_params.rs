//! Execution parameters - use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control the
//! round loop in [`RunChatUseCase`](crate::use_cases::run_chat::RunChatUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Default ceiling on model round trips per invocation.
pub const DEFAULT_MAX_ROUNDS: usize = 5;

/// Execution loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of model round trips in one chat invocation.
    pub max_rounds: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    /// Set the round ceiling. Zero is clamped to one so that every
    /// invocation asks the model at least once.
    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max.max(1);
        self
    }
}
