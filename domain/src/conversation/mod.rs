//! Conversation domain module
//!
//! Types describing one bounded exchange with the remote model:
//!
//! - [`Transcript`] - append-only history owned by a single invocation
//! - [`ConversationTurn`] - user text, model tool call, or tool result
//! - [`ModelReply`] - the model's response envelope, with
//!   [`ModelReply::first_part`] diagnosing missing candidates/content/parts

pub mod reply;
pub mod transcript;

pub use reply::{
    Candidate, CandidateContent, FunctionCallPart, ModelReply, ReplyPart, ReplyPartKind,
    ReplyShapeError,
};
pub use transcript::{ConversationTurn, Transcript};
