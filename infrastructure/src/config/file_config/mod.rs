//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section has defaults so a missing
//! file or a partial one still yields a usable configuration.

mod chat;
mod gemini;
mod inventory;
mod server;

pub use chat::FileChatConfig;
pub use gemini::FileGeminiConfig;
pub use inventory::FileInventoryConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("chat.max_rounds cannot be 0")]
    InvalidMaxRounds,

    #[error("gemini.api_url cannot be empty")]
    EmptyApiUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model endpoint settings
    pub gemini: FileGeminiConfig,
    /// Chat loop settings
    pub chat: FileChatConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Inventory store settings
    pub inventory: FileInventoryConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.chat.max_rounds == 0 {
            return Err(ConfigValidationError::InvalidMaxRounds);
        }
        if self.gemini.api_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiUrl);
        }
        Ok(())
    }
}
