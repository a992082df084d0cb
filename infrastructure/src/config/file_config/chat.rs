//! Chat loop configuration from TOML (`[chat]` section)

use ims_application::{DEFAULT_MAX_ROUNDS, ExecutionParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Maximum model round trips per message
    pub max_rounds: usize,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl FileChatConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default().with_max_rounds(self.max_rounds)
    }
}
