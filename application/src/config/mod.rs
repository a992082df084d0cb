//! Application-level configuration.
//!
//! - [`ExecutionParams`] - chat loop control (round ceiling)

pub mod execution_params;

pub use execution_params::{DEFAULT_MAX_ROUNDS, ExecutionParams};
