//! HTTP routes for the chat endpoint
//!
//! The endpoint is open to any origin and carries no authentication, matching
//! the rest of the `/api/chatbot` surface.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use ims_application::RunChatUseCase;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Liveness text for `GET /api/chatbot/test`
pub const HEALTH_MESSAGE: &str = "✅ Chatbot API is working!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Create the chatbot router
pub fn create_router(chat: Arc<RunChatUseCase>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chatbot/chat", post(chat_message))
        .route("/api/chatbot/test", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(chat)
}

async fn chat_message(
    State(chat): State<Arc<RunChatUseCase>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!("Chat request received ({} chars)", request.message.chars().count());
    let response = chat.chat(&request.message).await;
    Json(ChatResponse { response })
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}
