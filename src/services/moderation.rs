//! Moderation façade
//!
//! Text classification over the `/moderations` endpoint

use crate::models::common::ApiResponse;
use crate::models::moderation::{ModerationRequest, ModerationResponse};
use crate::services::dispatch::ApiDispatcher;
use crate::utils::error::ClientResult;
use async_trait::async_trait;

/// Endpoint path segment
const ENDPOINT: &str = "moderations";

/// Moderation operations
#[async_trait]
pub trait ModerationApi {
    /// Classify the given input
    async fn classify(
        &self,
        request: ModerationRequest,
    ) -> ClientResult<ApiResponse<ModerationResponse>>;

    /// Classify a single text with the configured default model
    async fn classify_text(
        &self,
        input: &str,
    ) -> ClientResult<ApiResponse<ModerationResponse>>;
}

/// Moderation client
#[derive(Debug, Clone)]
pub struct ModerationClient {
    dispatcher: ApiDispatcher,
}

impl ModerationClient {
    /// Create a moderation client over the shared dispatcher
    pub fn new(dispatcher: ApiDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ModerationApi for ModerationClient {
    async fn classify(
        &self,
        request: ModerationRequest,
    ) -> ClientResult<ApiResponse<ModerationResponse>> {
        self.dispatcher.post_json(ENDPOINT, &request).await
    }

    async fn classify_text(
        &self,
        input: &str,
    ) -> ClientResult<ApiResponse<ModerationResponse>> {
        let model = self.dispatcher.settings().default_moderation_model.clone();
        self.classify(ModerationRequest::text(model, input)).await
    }
}
