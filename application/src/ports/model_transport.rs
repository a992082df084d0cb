//! Model transport port
//!
//! Defines the interface for sending a transcript to the remote language
//! model. The adapter is the only component allowed to perform network I/O.

use async_trait::async_trait;
use ims_domain::{ModelReply, Transcript};
use thiserror::Error;

/// HTTP status the model endpoint uses for quota and rate limits.
pub const QUOTA_EXHAUSTED_STATUS: u16 = 429;

/// Errors that can occur while talking to the model endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS or TLS failure
    #[error("{0}")]
    Connection(String),

    #[error("Request to the model endpoint timed out")]
    Timeout,

    /// Endpoint answered with a non-success status
    #[error("API returned status {code}: {body}")]
    Status { code: u16, body: String },

    /// Success status but the body was not a reply envelope
    #[error("Failed to parse model response: {0}")]
    InvalidBody(String),
}

impl TransportError {
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, TransportError::Status { code, .. } if *code == QUOTA_EXHAUSTED_STATUS)
    }
}

/// Transport to the remote model
///
/// Implementations are stateless across calls and attach the fixed system
/// instruction themselves.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Whether a usable credential is present.
    ///
    /// Callers check this before the first round so that an unset or
    /// placeholder key never results in a network call.
    fn is_configured(&self) -> bool;

    /// Send the full transcript and tool declarations for one round.
    ///
    /// `Ok(None)` means the endpoint answered with an empty or `null` body.
    async fn send(
        &self,
        transcript: &Transcript,
        tools: &[serde_json::Value],
    ) -> Result<Option<ModelReply>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = TransportError::Status {
            code: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 500: boom");
        assert!(!err.is_quota_exhausted());
    }

    #[test]
    fn test_quota_detection_uses_status_code() {
        let quota = TransportError::Status {
            code: 429,
            body: "RESOURCE_EXHAUSTED".to_string(),
        };
        assert!(quota.is_quota_exhausted());

        // A body mentioning 429 is not enough
        let other = TransportError::Status {
            code: 503,
            body: "retry after 429ms".to_string(),
        };
        assert!(!other.is_quota_exhausted());
        assert!(!TransportError::Connection("429".to_string()).is_quota_exhausted());
    }
}
