//! Gemini endpoint configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

use crate::gemini::DEFAULT_API_URL;

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Full `generateContent` endpoint URL.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileGeminiConfig {
    /// The key to use: the `api_key_env` variable if set and non-empty,
    /// otherwise `api_key`, otherwise an empty string.
    pub fn resolve_api_key(&self) -> String {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or_default()
    }
}
