//! Configuration file loading for the IMS assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IMS_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ims.toml` or `./.ims.toml`
//! 4. Global: `~/.config/ims-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileGeminiConfig, FileInventoryConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
