//! Model reply envelope.
//!
//! Mirrors the `generateContent` response shape: a list of candidates, each
//! with content made of parts, where a part holds either text or a function
//! call. Every level is optional so that incomplete replies deserialize and
//! can be diagnosed instead of failing as a parse error.
//!
//! # Examples
//!
//! ```
//! use ims_domain::conversation::reply::{ModelReply, ReplyPartKind};
//!
//! let reply: ModelReply = serde_json::from_str(
//!     r#"{"candidates":[{"content":{"parts":[{"text":"Hello!"}]}}]}"#,
//! ).unwrap();
//!
//! let part = reply.first_part().unwrap();
//! assert!(matches!(part.kind(), ReplyPartKind::Text("Hello!")));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a reply could not yield a first part.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShapeError {
    #[error("reply has no candidates")]
    NoCandidates,
    #[error("first candidate has no content")]
    NoContent,
    #[error("candidate content has no parts")]
    NoParts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<ReplyPart>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCallPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallPart {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}

/// What a single reply part asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplyPartKind<'a> {
    FunctionCall(&'a FunctionCallPart),
    Text(&'a str),
    /// Neither text nor a function call
    Empty,
}

impl ModelReply {
    /// A reply holding a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::single_part(ReplyPart {
            text: Some(text.into()),
            function_call: None,
        })
    }

    /// A reply holding a single function-call part.
    pub fn from_function_call(name: impl Into<String>, args: serde_json::Value) -> Self {
        Self::single_part(ReplyPart {
            text: None,
            function_call: Some(FunctionCallPart {
                name: name.into(),
                args: Some(args),
            }),
        })
    }

    pub fn single_part(part: ReplyPart) -> Self {
        Self {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    role: Some("model".to_string()),
                    parts: Some(vec![part]),
                }),
                finish_reason: None,
            }]),
        }
    }

    /// The first part of the first candidate. Additional candidates and
    /// parts are ignored.
    pub fn first_part(&self) -> Result<&ReplyPart, ReplyShapeError> {
        let candidate = self
            .candidates
            .as_deref()
            .and_then(|c| c.first())
            .ok_or(ReplyShapeError::NoCandidates)?;
        let content = candidate
            .content
            .as_ref()
            .ok_or(ReplyShapeError::NoContent)?;
        content
            .parts
            .as_deref()
            .and_then(|p| p.first())
            .ok_or(ReplyShapeError::NoParts)
    }
}

impl ReplyPart {
    /// Classify the part. A function call wins over text when both are set.
    pub fn kind(&self) -> ReplyPartKind<'_> {
        if let Some(call) = &self.function_call {
            return ReplyPartKind::FunctionCall(call);
        }
        match &self.text {
            Some(text) => ReplyPartKind::Text(text),
            None => ReplyPartKind::Empty,
        }
    }
}
