//! Gemini `generateContent` request types.
//!
//! Only the request side lives here. Responses are decoded straight into the
//! domain's [`ModelReply`](ims_domain::ModelReply) envelope.

use ims_domain::{ConversationTurn, Transcript};
use serde::Serialize;
use serde_json::{Value, json};

/// Fixed instruction attached to every request
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful inventory assistant. Use the provided functions to get real data from the database when users ask about inventory, vendors, borrowers, loans, or stock levels.";

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolBlock>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: SystemInstruction,
}

#[derive(Debug, Serialize)]
pub struct ToolBlock {
    #[serde(rename = "functionDeclarations")]
    pub function_declarations: Vec<Value>,
}

/// System instruction block; unlike [`Content`] it carries no role.
#[derive(Debug, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
}

#[derive(Debug, Serialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: Value,
}

#[derive(Debug, Serialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

impl Content {
    fn single(role: &'static str, part: Part) -> Self {
        Self {
            role,
            parts: vec![part],
        }
    }
}

impl From<&ConversationTurn> for Content {
    fn from(turn: &ConversationTurn) -> Self {
        match turn {
            ConversationTurn::UserText { text } => {
                Content::single("user", Part::Text { text: text.clone() })
            }
            ConversationTurn::ModelToolCall {
                tool_name,
                arguments,
            } => Content::single(
                "model",
                Part::FunctionCall {
                    function_call: FunctionCall {
                        name: tool_name.clone(),
                        args: Value::Object(
                            arguments
                                .iter()
                                .map(|(k, v)| (k.clone(), v.clone()))
                                .collect(),
                        ),
                    },
                },
            ),
            ConversationTurn::ToolResult {
                tool_name,
                result_text,
            } => Content::single(
                "user",
                Part::FunctionResponse {
                    function_response: FunctionResponse {
                        name: tool_name.clone(),
                        response: json!({ "content": result_text }),
                    },
                },
            ),
        }
    }
}

impl GenerateContentRequest {
    /// Build the request body for one round.
    pub fn new(transcript: &Transcript, function_declarations: &[Value]) -> Self {
        let tools = if function_declarations.is_empty() {
            Vec::new()
        } else {
            vec![ToolBlock {
                function_declarations: function_declarations.to_vec(),
            }]
        };

        Self {
            contents: transcript.turns().iter().map(Content::from).collect(),
            tools,
            system_instruction: SystemInstruction {
                parts: vec![Part::Text {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
        }
    }
}
