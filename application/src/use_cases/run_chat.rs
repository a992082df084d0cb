//! Run Chat use case.
//!
//! Answers one user message by looping between the remote model and the
//! query gateway:
//!
//! ```text
//! AwaitingModelReply ──text──────────▶ FinalAnswer
//!        │  ▲
//!   tool │  │ result appended
//!   call ▼  │
//!   ToolCallPending
//!
//! (round ceiling reached) ───────────▶ IterationExhausted
//! ```
//!
//! Each invocation owns its [`Transcript`] and discards it on return. Any
//! failure other than a tool-level error ends the invocation; nothing is
//! retried. [`RunChatUseCase::chat`] always yields a string.

use crate::config::ExecutionParams;
use crate::ports::chat_progress::{ChatProgressNotifier, NoChatProgress};
use crate::ports::model_transport::{ModelTransport, TransportError};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use ims_domain::util::truncate_chars;
use ims_domain::{DomainError, ModelReply, ReplyPartKind, ReplyShapeError, ToolCall, Transcript};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Final answer when the round budget runs out.
pub const EXHAUSTED_MESSAGE: &str = "Sorry, I couldn't complete that request.";

/// Characters of an upstream status error kept in the user-facing message.
const STATUS_ERROR_PREVIEW_CHARS: usize = 200;

/// Errors that end a chat invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunChatError {
    #[error("Model transport is not configured")]
    NotConfigured,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Model endpoint returned an empty body")]
    EmptyBody,

    #[error("Malformed reply: {0}")]
    MalformedReply(#[from] ReplyShapeError),

    #[error("Reply part contained neither text nor a function call")]
    EmptyPart,

    #[error("Invalid function call: {0}")]
    InvalidFunctionCall(#[from] DomainError),
}

impl RunChatError {
    /// The string returned to the end user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            RunChatError::NotConfigured => {
                "⚠️ Chatbot is not configured. Please set a valid Gemini API key.".to_string()
            }
            RunChatError::Transport(err) if err.is_quota_exhausted() => {
                "⚠️ Chatbot quota exceeded. The free tier limit has been reached. \
                 Please try again later or upgrade your API plan at https://ai.google.dev/pricing"
                    .to_string()
            }
            RunChatError::Transport(err @ TransportError::Status { .. }) => {
                let detail = err.to_string();
                format!(
                    "⚠️ API Error: {}...",
                    truncate_chars(&detail, STATUS_ERROR_PREVIEW_CHARS)
                )
            }
            RunChatError::Transport(err) => format!("❌ Error: {}", err),
            RunChatError::EmptyBody => {
                "Error: Received null response from Gemini API. Please check your API key."
                    .to_string()
            }
            RunChatError::MalformedReply(ReplyShapeError::NoCandidates) => {
                "Error: No response candidates from API. \
                 The API key might be invalid or the request was blocked."
                    .to_string()
            }
            RunChatError::MalformedReply(ReplyShapeError::NoContent) => {
                "Error: No content in API response. Please try again.".to_string()
            }
            RunChatError::MalformedReply(ReplyShapeError::NoParts) => {
                "Error: No parts in response content.".to_string()
            }
            RunChatError::EmptyPart => {
                "Error: Response part contained neither text nor a function call.".to_string()
            }
            RunChatError::InvalidFunctionCall(err) => {
                format!("Error: Invalid function call in response: {}", err)
            }
        }
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// The model replied with text
    FinalAnswer,
    /// Every round produced a tool call
    IterationExhausted,
    /// Configuration, transport, status or payload failure
    Failed(RunChatError),
}

/// Everything a chat invocation produced.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// The string handed back to the caller
    pub response: String,
    /// Transcript as it stood when the loop ended
    pub transcript: Transcript,
    /// Number of requests sent to the model
    pub rounds: usize,
    pub termination: Termination,
}

impl ChatOutcome {
    pub fn is_final_answer(&self) -> bool {
        matches!(self.termination, Termination::FinalAnswer)
    }
}

/// Interpretation of a single model reply.
#[derive(Debug)]
enum RoundOutcome {
    FinalAnswer(String),
    ToolCallPending(ToolCall),
}

/// Use case for answering a message with tool-augmented model calls.
#[derive(Clone)]
pub struct RunChatUseCase {
    transport: Arc<dyn ModelTransport>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    execution: ExecutionParams,
}

impl RunChatUseCase {
    pub fn new(
        transport: Arc<dyn ModelTransport>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            transport,
            tool_executor,
            tool_schema,
            execution: ExecutionParams::default(),
        }
    }

    pub fn with_execution_params(mut self, execution: ExecutionParams) -> Self {
        self.execution = execution;
        self
    }

    /// Answer `message`, returning only the response string.
    pub async fn chat(&self, message: &str) -> String {
        self.execute(message, &NoChatProgress).await.response
    }

    /// Answer `message` with progress callbacks, returning the full outcome.
    pub async fn execute(&self, message: &str, progress: &dyn ChatProgressNotifier) -> ChatOutcome {
        info!("Starting chat: {}", truncate_chars(message, 100));

        let mut transcript = Transcript::new(message);

        if !self.transport.is_configured() {
            warn!("Chat rejected: model transport has no usable API key");
            return Self::failed(transcript, 0, RunChatError::NotConfigured, progress);
        }

        // Read-only tools only; the catalog never offers anything else
        let tools = self
            .tool_schema
            .read_only_tools_schema(self.tool_executor.tool_spec());
        let max_rounds = self.execution.max_rounds;

        for round in 1..=max_rounds {
            debug!(
                "Chat round {}/{}: sending {} turns, {} tools",
                round,
                max_rounds,
                transcript.len(),
                tools.len()
            );
            progress.on_round_start(round, max_rounds);

            let reply = match self.transport.send(&transcript, &tools).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!("Chat round {} transport failure: {}", round, err);
                    return Self::failed(transcript, round, err.into(), progress);
                }
            };

            match Self::interpret(reply) {
                Ok(RoundOutcome::FinalAnswer(text)) => {
                    info!("Chat completed in {} rounds", round);
                    progress.on_complete(round);
                    return ChatOutcome {
                        response: text,
                        transcript,
                        rounds: round,
                        termination: Termination::FinalAnswer,
                    };
                }
                Ok(RoundOutcome::ToolCallPending(call)) => {
                    debug!("Chat round {}: model requested '{}'", round, call.tool_name);
                    progress.on_tool_call(round, &call);

                    let result = self.tool_executor.execute(&call).await;
                    if !result.is_success() {
                        debug!(
                            "Tool '{}' returned an error: {:?}",
                            call.tool_name,
                            result.error()
                        );
                    }
                    progress.on_tool_result(round, &result);

                    transcript.record_tool_exchange(&call, result.to_transcript_text());
                }
                Err(err) => {
                    warn!("Chat round {} unusable reply: {}", round, err);
                    return Self::failed(transcript, round, err, progress);
                }
            }
        }

        warn!("Chat exhausted its budget of {} rounds", max_rounds);
        progress.on_complete(max_rounds);
        ChatOutcome {
            response: EXHAUSTED_MESSAGE.to_string(),
            transcript,
            rounds: max_rounds,
            termination: Termination::IterationExhausted,
        }
    }

    /// Classify a reply using only the first part of the first candidate.
    fn interpret(reply: Option<ModelReply>) -> Result<RoundOutcome, RunChatError> {
        let reply = reply.ok_or(RunChatError::EmptyBody)?;
        let part = reply.first_part()?;

        match part.kind() {
            ReplyPartKind::FunctionCall(call) => {
                let call = ToolCall::from_function_call(&call.name, call.args.as_ref())?;
                Ok(RoundOutcome::ToolCallPending(call))
            }
            ReplyPartKind::Text(text) => Ok(RoundOutcome::FinalAnswer(text.to_string())),
            ReplyPartKind::Empty => Err(RunChatError::EmptyPart),
        }
    }

    fn failed(
        transcript: Transcript,
        rounds: usize,
        error: RunChatError,
        progress: &dyn ChatProgressNotifier,
    ) -> ChatOutcome {
        progress.on_complete(rounds);
        ChatOutcome {
            response: error.user_message(),
            transcript,
            rounds,
            termination: Termination::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::tool_schema::ToolSchemaPort;
    use async_trait::async_trait;
    use ims_domain::{
        ConversationTurn, RiskLevel, ToolDefinition, ToolError, ToolParameter, ToolResult,
        ToolSpec,
    };
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    type Scripted = Result<Option<ModelReply>, TransportError>;

    struct MockTransport {
        configured: bool,
        replies: Mutex<VecDeque<Scripted>>,
        /// Reply used once the script runs out
        fallback: Option<ModelReply>,
        calls: AtomicUsize,
        seen_transcript_lens: Mutex<Vec<usize>>,
        seen_tool_names: Mutex<Vec<Vec<String>>>,
    }

    impl MockTransport {
        fn new(replies: Vec<Scripted>) -> Self {
            Self {
                configured: true,
                replies: Mutex::new(VecDeque::from(replies)),
                fallback: None,
                calls: AtomicUsize::new(0),
                seen_transcript_lens: Mutex::new(Vec::new()),
                seen_tool_names: Mutex::new(Vec::new()),
            }
        }

        fn always(reply: ModelReply) -> Self {
            let mut transport = Self::new(vec![]);
            transport.fallback = Some(reply);
            transport
        }

        fn unconfigured() -> Self {
            let mut transport = Self::new(vec![Ok(Some(ModelReply::from_text("unreachable")))]);
            transport.configured = false;
            transport
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelTransport for MockTransport {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn send(
            &self,
            transcript: &Transcript,
            tools: &[serde_json::Value],
        ) -> Result<Option<ModelReply>, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_transcript_lens
                .lock()
                .unwrap()
                .push(transcript.len());
            self.seen_tool_names.lock().unwrap().push(
                tools
                    .iter()
                    .map(|t| t["name"].as_str().unwrap_or_default().to_string())
                    .collect(),
            );

            match self.replies.lock().unwrap().pop_front() {
                Some(scripted) => scripted,
                None => self
                    .fallback
                    .clone()
                    .map(Some)
                    .ok_or_else(|| TransportError::Connection("No more replies".to_string())),
            }
        }
    }

    struct MockToolExecutor {
        spec: ToolSpec,
        calls: Mutex<Vec<ToolCall>>,
    }

    impl MockToolExecutor {
        fn new() -> Self {
            Self {
                spec: ToolSpec::new()
                    .register(ToolDefinition::new(
                        "getLowStockItems",
                        "Low stock items",
                        RiskLevel::Low,
                    )
                    .with_parameter(
                        ToolParameter::new("threshold", "Threshold", false).with_type("number"),
                    ))
                    .register(ToolDefinition::new(
                        "getAllVendors",
                        "All vendors",
                        RiskLevel::Low,
                    ))
                    .register(ToolDefinition::new(
                        "deleteItem",
                        "Never offered",
                        RiskLevel::High,
                    )),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn recorded(&self) -> Vec<ToolCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolExecutorPort for MockToolExecutor {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            self.calls.lock().unwrap().push(call.clone());
            match call.tool_name.as_str() {
                "getLowStockItems" => ToolResult::success(
                    &call.tool_name,
                    "Found 1 items with stock below 10:\n\n• Laptop (ID: 10, Quantity: 4, Price: $800.00)\n",
                ),
                "getAllVendors" => ToolResult::success(&call.tool_name, "{\"vendors\":[],\"count\":0}"),
                other => ToolResult::failure(other, ToolError::unknown_function(other)),
            }
        }
    }

    struct NameOnlySchema;

    impl ToolSchemaPort for NameOnlySchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            json!({ "name": tool.name, "description": tool.description })
        }
    }

    struct Harness {
        transport: Arc<MockTransport>,
        executor: Arc<MockToolExecutor>,
        use_case: RunChatUseCase,
    }

    fn harness(transport: MockTransport) -> Harness {
        let transport = Arc::new(transport);
        let executor = Arc::new(MockToolExecutor::new());
        let use_case = RunChatUseCase::new(
            transport.clone(),
            executor.clone(),
            Arc::new(NameOnlySchema),
        );
        Harness {
            transport,
            executor,
            use_case,
        }
    }

    fn tool_call(name: &str, args: serde_json::Value) -> Scripted {
        Ok(Some(ModelReply::from_function_call(name, args)))
    }

    fn text(answer: &str) -> Scripted {
        Ok(Some(ModelReply::from_text(answer)))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_plain_text_reply_is_final_answer() {
        let h = harness(MockTransport::new(vec![text("Hello! How can I help?")]));

        let outcome = h.use_case.execute("hi", &NoChatProgress).await;

        assert_eq!(outcome.response, "Hello! How can I help?");
        assert_eq!(outcome.termination, Termination::FinalAnswer);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.transcript.len(), 1);
        assert!(h.executor.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_low_stock_scenario_builds_three_turn_transcript() {
        let h = harness(MockTransport::new(vec![
            tool_call("getLowStockItems", json!({})),
            text("Laptop is running low."),
        ]));

        let outcome = h
            .use_case
            .execute("What items are low in stock?", &NoChatProgress)
            .await;

        assert_eq!(outcome.response, "Laptop is running low.");
        assert!(outcome.is_final_answer());
        assert_eq!(outcome.rounds, 2);

        let turns = outcome.transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(
            turns[0],
            ConversationTurn::user_text("What items are low in stock?")
        );
        assert!(matches!(
            &turns[1],
            ConversationTurn::ModelToolCall { tool_name, arguments }
                if tool_name == "getLowStockItems" && arguments.is_empty()
        ));
        match &turns[2] {
            ConversationTurn::ToolResult {
                tool_name,
                result_text,
            } => {
                assert_eq!(tool_name, "getLowStockItems");
                assert!(result_text.contains("Laptop"));
            }
            other => panic!("Expected ToolResult, got {:?}", other),
        }

        // The second round saw the grown transcript
        assert_eq!(*h.transport.seen_transcript_lens.lock().unwrap(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_round_cap_forces_apology() {
        let h = harness(MockTransport::always(
            ModelReply::from_function_call("getAllVendors", json!({})),
        ));

        let outcome = h.use_case.execute("loop forever", &NoChatProgress).await;

        assert_eq!(outcome.response, EXHAUSTED_MESSAGE);
        assert_eq!(outcome.termination, Termination::IterationExhausted);
        assert_eq!(outcome.rounds, 5);
        assert_eq!(h.transport.call_count(), 5);
        assert_eq!(h.executor.recorded().len(), 5);
        assert_eq!(outcome.transcript.len(), 1 + 2 * 5);
    }

    #[tokio::test]
    async fn test_round_cap_is_configurable() {
        let h = harness(MockTransport::always(
            ModelReply::from_function_call("getAllVendors", json!({})),
        ));
        let use_case = h
            .use_case
            .clone()
            .with_execution_params(ExecutionParams::default().with_max_rounds(2));

        let outcome = use_case.execute("loop", &NoChatProgress).await;

        assert_eq!(outcome.rounds, 2);
        assert_eq!(h.transport.call_count(), 2);
        assert_eq!(outcome.response, EXHAUSTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_identical_tool_calls_are_not_deduplicated() {
        let h = harness(MockTransport::new(vec![
            tool_call("getLowStockItems", json!({"threshold": 5})),
            tool_call("getLowStockItems", json!({"threshold": 5})),
            text("done"),
        ]));

        let outcome = h.use_case.execute("twice", &NoChatProgress).await;

        assert_eq!(outcome.response, "done");
        let calls = h.executor.recorded();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(outcome.transcript.len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_tool_error_is_fed_back_and_loop_continues() {
        let h = harness(MockTransport::new(vec![
            tool_call("dropAllTables", json!({})),
            text("I can't do that."),
        ]));

        let outcome = h.use_case.execute("drop everything", &NoChatProgress).await;

        assert_eq!(outcome.response, "I can't do that.");
        match &outcome.transcript.turns()[2] {
            ConversationTurn::ToolResult { result_text, .. } => {
                let parsed: serde_json::Value = serde_json::from_str(result_text).unwrap();
                assert_eq!(parsed["error"], "Unknown function: dropAllTables");
            }
            other => panic!("Expected ToolResult, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_quota_exhaustion_stops_after_one_round() {
        let h = harness(MockTransport::new(vec![
            Err(TransportError::Status {
                code: 429,
                body: "{\"error\":{\"status\":\"RESOURCE_EXHAUSTED\"}}".to_string(),
            }),
            text("never sent"),
        ]));

        let response = h.use_case.chat("hello").await;

        assert!(response.contains("quota"));
        assert_eq!(h.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_transport_makes_no_network_call() {
        let h = harness(MockTransport::unconfigured());

        let outcome = h.use_case.execute("hello", &NoChatProgress).await;

        assert_eq!(
            outcome.response,
            "⚠️ Chatbot is not configured. Please set a valid Gemini API key."
        );
        assert_eq!(outcome.termination, Termination::Failed(RunChatError::NotConfigured));
        assert_eq!(outcome.rounds, 0);
        assert_eq!(h.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_other_status_is_truncated() {
        let body = "x".repeat(500);
        let h = harness(MockTransport::new(vec![Err(TransportError::Status {
            code: 500,
            body: body.clone(),
        })]));

        let response = h.use_case.chat("hello").await;

        assert!(response.starts_with("⚠️ API Error: API returned status 500: xxx"));
        assert!(response.ends_with("..."));
        let detail = response
            .trim_start_matches("⚠️ API Error: ")
            .trim_end_matches("...");
        assert_eq!(detail.chars().count(), 200);
    }

    #[tokio::test]
    async fn test_connection_failure_message() {
        let h = harness(MockTransport::new(vec![Err(TransportError::Connection(
            "connection refused".to_string(),
        ))]));

        assert_eq!(h.use_case.chat("hello").await, "❌ Error: connection refused");
        assert_eq!(h.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_replies_fail_closed() {
        let cases: Vec<(ModelReply, &str)> = vec![
            (
                ModelReply::default(),
                "Error: No response candidates from API. The API key might be invalid or the request was blocked.",
            ),
            (
                serde_json::from_value(json!({"candidates": [{}]})).unwrap(),
                "Error: No content in API response. Please try again.",
            ),
            (
                serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]}))
                    .unwrap(),
                "Error: No parts in response content.",
            ),
            (
                serde_json::from_value(json!({"candidates": [{"content": {"parts": [{}]}}]}))
                    .unwrap(),
                "Error: Response part contained neither text nor a function call.",
            ),
        ];

        for (reply, expected) in cases {
            let h = harness(MockTransport::new(vec![Ok(Some(reply)), text("never")]));
            let outcome = h.use_case.execute("hello", &NoChatProgress).await;
            assert_eq!(outcome.response, expected);
            assert!(matches!(outcome.termination, Termination::Failed(_)));
            assert_eq!(h.transport.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn test_empty_body_message() {
        let h = harness(MockTransport::new(vec![Ok(None)]));
        assert_eq!(
            h.use_case.chat("hello").await,
            "Error: Received null response from Gemini API. Please check your API key."
        );
    }

    #[tokio::test]
    async fn test_empty_function_name_fails_closed() {
        let h = harness(MockTransport::new(vec![tool_call("", json!({}))]));

        let outcome = h.use_case.execute("hello", &NoChatProgress).await;

        assert_eq!(
            outcome.termination,
            Termination::Failed(RunChatError::InvalidFunctionCall(DomainError::EmptyToolName))
        );
        assert!(h.executor.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_only_read_only_tools_are_offered() {
        let h = harness(MockTransport::new(vec![text("ok")]));

        h.use_case.chat("hello").await;

        let offered = h.transport.seen_tool_names.lock().unwrap()[0].clone();
        assert_eq!(offered, vec!["getLowStockItems", "getAllVendors"]);
    }

    #[tokio::test]
    async fn test_progress_callbacks() {
        #[derive(Default)]
        struct Recorder {
            events: Mutex<Vec<String>>,
        }

        impl ChatProgressNotifier for Recorder {
            fn on_round_start(&self, round: usize, max_rounds: usize) {
                self.events
                    .lock()
                    .unwrap()
                    .push(format!("round {}/{}", round, max_rounds));
            }
            fn on_tool_call(&self, _round: usize, call: &ToolCall) {
                self.events
                    .lock()
                    .unwrap()
                    .push(format!("call {}", call.tool_name));
            }
            fn on_tool_result(&self, _round: usize, result: &ToolResult) {
                self.events
                    .lock()
                    .unwrap()
                    .push(format!("result {}", result.is_success()));
            }
            fn on_complete(&self, rounds: usize) {
                self.events.lock().unwrap().push(format!("done {}", rounds));
            }
        }

        let h = harness(MockTransport::new(vec![
            tool_call("getAllVendors", json!({})),
            text("two vendors"),
        ]));
        let recorder = Recorder::default();

        h.use_case.execute("vendors?", &recorder).await;

        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec![
                "round 1/5",
                "call getAllVendors",
                "result true",
                "round 2/5",
                "done 2"
            ]
        );
    }
}
