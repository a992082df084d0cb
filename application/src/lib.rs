//! Application layer for the IMS assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_ROUNDS, ExecutionParams};
pub use ports::{
    chat_progress::{ChatProgressNotifier, NoChatProgress},
    inventory_repository::{InventoryRepository, RepositoryError},
    model_transport::{ModelTransport, QUOTA_EXHAUSTED_STATUS, TransportError},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::run_chat::{
    ChatOutcome, EXHAUSTED_MESSAGE, RunChatError, RunChatUseCase, Termination,
};
