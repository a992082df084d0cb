//! HTTP transport to the Gemini `generateContent` endpoint.

use super::protocol::GenerateContentRequest;
use async_trait::async_trait;
use ims_application::ports::model_transport::{ModelTransport, TransportError};
use ims_domain::{ModelReply, Transcript};
use tracing::{debug, error};

/// Key value shipped in sample configuration files
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Default endpoint when none is configured
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// [`ModelTransport`] over HTTPS with the API key in the query string.
///
/// The `reqwest::Client` is shared; its timeout bounds each round.
#[derive(Clone)]
pub struct GeminiTransport {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for GeminiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTransport")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        // reqwest includes the full URL, key included, in its messages.
        TransportError::Connection(err.without_url().to_string())
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }

    async fn send(
        &self,
        transcript: &Transcript,
        tools: &[serde_json::Value],
    ) -> Result<Option<ModelReply>, TransportError> {
        let request = GenerateContentRequest::new(transcript, tools);
        debug!(
            "Sending {} turns and {} function declarations to {}",
            request.contents.len(),
            tools.len(),
            self.api_url
        );

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            error!("Gemini API returned {}", status);
            // The status decides the error; a body cut off mid-read only loses detail.
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(map_send_error)?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str::<ModelReply>(trimmed)
            .map(Some)
            .map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}
