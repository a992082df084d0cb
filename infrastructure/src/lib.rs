//! Infrastructure layer for the IMS assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini transport, the inventory store,
//! the tool gateway, and configuration file loading.

pub mod config;
pub mod gemini;
pub mod store;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig, FileGeminiConfig,
    FileInventoryConfig, FileServerConfig,
};
pub use gemini::{DEFAULT_API_URL, GeminiTransport, PLACEHOLDER_API_KEY};
pub use store::{InMemoryInventoryStore, StoreError};
pub use tools::{
    GeminiToolSchemaConverter, InventoryQuery, InventoryToolExecutor, ParityReport,
    default_tool_spec,
};
