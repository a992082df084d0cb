//! Presentation layer for the IMS assistant
//!
//! This crate contains CLI definitions, the HTTP chat routes, output
//! formatters and progress reporters.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::routes::{ChatRequest, ChatResponse, HEALTH_MESSAGE, create_router};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
