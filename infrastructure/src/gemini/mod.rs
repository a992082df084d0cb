//! Gemini model transport adapter

pub mod protocol;
mod transport;

pub use transport::{DEFAULT_API_URL, GeminiTransport, PLACEHOLDER_API_KEY};
