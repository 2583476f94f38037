//! Chat completion façade
//!
//! Conversation completion over the `/chat/completions` endpoint

use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::common::ApiResponse;
use crate::services::dispatch::ApiDispatcher;
use crate::utils::error::ClientResult;
use async_trait::async_trait;

/// Endpoint path segment
const ENDPOINT: &str = "chat/completions";

/// Chat completion operations
#[async_trait]
pub trait ChatApi {
    /// Create a chat completion
    async fn create(&self, request: ChatRequest) -> ClientResult<ApiResponse<ChatResponse>>;

    /// Complete a single user message with the configured default model
    async fn create_simple(&self, text: &str) -> ClientResult<ApiResponse<ChatResponse>>;
}

/// Chat completion client
#[derive(Debug, Clone)]
pub struct ChatClient {
    dispatcher: ApiDispatcher,
}

impl ChatClient {
    /// Create a chat client over the shared dispatcher
    pub fn new(dispatcher: ApiDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ChatApi for ChatClient {
    async fn create(&self, request: ChatRequest) -> ClientResult<ApiResponse<ChatResponse>> {
        self.dispatcher.post_json(ENDPOINT, &request).await
    }

    async fn create_simple(&self, text: &str) -> ClientResult<ApiResponse<ChatResponse>> {
        let model = self.dispatcher.settings().default_chat_model.clone();
        self.create(ChatRequest::from_user_text(model, text)).await
    }
}
