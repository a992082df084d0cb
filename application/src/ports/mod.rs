//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_progress;
pub mod inventory_repository;
pub mod model_transport;
pub mod tool_executor;
pub mod tool_schema;
