//! Conversation transcript for a single chat invocation.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry in the conversation exchanged with the remote model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversationTurn {
    /// The end user's message
    UserText { text: String },
    /// A tool invocation requested by the model
    ModelToolCall {
        tool_name: String,
        arguments: HashMap<String, serde_json::Value>,
    },
    /// The rendered outcome of that invocation
    ToolResult {
        tool_name: String,
        result_text: String,
    },
}

impl ConversationTurn {
    pub fn user_text(text: impl Into<String>) -> Self {
        ConversationTurn::UserText { text: text.into() }
    }

    pub fn is_tool_call(&self) -> bool {
        matches!(self, ConversationTurn::ModelToolCall { .. })
    }
}

/// Ordered, append-only conversation history.
///
/// A transcript always starts with exactly one [`ConversationTurn::UserText`]
/// and then grows two turns at a time: a model tool call followed by its
/// result. There is no way to remove or reorder turns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    /// Start a transcript from the caller's message.
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            turns: vec![ConversationTurn::user_text(user_message)],
        }
    }

    /// Append a tool call and its result as one unit.
    pub fn record_tool_exchange(&mut self, call: &ToolCall, result_text: impl Into<String>) {
        self.turns.push(ConversationTurn::ModelToolCall {
            tool_name: call.tool_name.clone(),
            arguments: call.arguments.clone(),
        });
        self.turns.push(ConversationTurn::ToolResult {
            tool_name: call.tool_name.clone(),
            result_text: result_text.into(),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false; a transcript holds at least the user's message.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of completed tool round trips.
    pub fn tool_exchanges(&self) -> usize {
        self.turns.iter().filter(|t| t.is_tool_call()).count()
    }

    pub fn user_message(&self) -> &str {
        match self.turns.first() {
            Some(ConversationTurn::UserText { text }) => text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_has_single_user_turn() {
        let transcript = Transcript::new("What items are low in stock?");
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        assert_eq!(transcript.user_message(), "What items are low in stock?");
        assert_eq!(transcript.tool_exchanges(), 0);
    }

    #[test]
    fn test_tool_exchange_appends_two_turns_in_order() {
        let mut transcript = Transcript::new("Show item 3");
        let call = ToolCall::new("getItemById").with_arg("itemId", 3);

        transcript.record_tool_exchange(&call, "{\"item\":{}}");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.tool_exchanges(), 1);
        match &transcript.turns()[1] {
            ConversationTurn::ModelToolCall {
                tool_name,
                arguments,
            } => {
                assert_eq!(tool_name, "getItemById");
                assert_eq!(arguments["itemId"], 3);
            }
            other => panic!("Expected ModelToolCall, got {:?}", other),
        }
        assert_eq!(
            transcript.turns()[2],
            ConversationTurn::ToolResult {
                tool_name: "getItemById".to_string(),
                result_text: "{\"item\":{}}".to_string(),
            }
        );
    }

    #[test]
    fn test_turn_serialization_is_tagged() {
        let json = serde_json::to_value(ConversationTurn::user_text("hi")).unwrap();
        assert_eq!(json["kind"], "user_text");
        assert_eq!(json["text"], "hi");
    }
}
