//! Audio façade
//!
//! Speech-to-text over the `/audio/transcriptions` endpoint

use crate::models::audio::{TranscriptionRequest, TranscriptionResponse};
use crate::models::common::ApiResponse;
use crate::services::dispatch::ApiDispatcher;
use crate::utils::error::ClientResult;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Endpoint path segment
const ENDPOINT: &str = "audio/transcriptions";

/// Audio transcription operations
#[async_trait]
pub trait AudioApi {
    /// Transcribe an audio file
    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> ClientResult<ApiResponse<TranscriptionResponse>>;

    /// Transcribe a file with the configured default model
    async fn transcribe_file(
        &self,
        file: &Path,
    ) -> ClientResult<ApiResponse<TranscriptionResponse>>;
}

/// Audio client
#[derive(Debug, Clone)]
pub struct AudioClient {
    dispatcher: ApiDispatcher,
}

impl AudioClient {
    /// Create an audio client over the shared dispatcher
    pub fn new(dispatcher: ApiDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Build the multipart form for a transcription request
    ///
    /// Unset optional fields produce no form part at all, mirroring the
    /// omit-null rule for JSON bodies.
    async fn build_form(request: &TranscriptionRequest) -> ClientResult<Form> {
        let bytes = tokio::fs::read(&request.file).await?;

        let file_name = request
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let mut form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("model", request.model.clone());

        if let Some(prompt) = &request.prompt {
            form = form.text("prompt", prompt.clone());
        }
        if let Some(language) = &request.language {
            form = form.text("language", language.clone());
        }
        if let Some(temperature) = request.temperature {
            form = form.text("temperature", temperature.to_string());
        }

        Ok(form)
    }
}

#[async_trait]
impl AudioApi for AudioClient {
    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> ClientResult<ApiResponse<TranscriptionResponse>> {
        let description = request.describe();
        let form = Self::build_form(&request).await?;

        self.dispatcher
            .post_multipart(ENDPOINT, form, &description)
            .await
    }

    async fn transcribe_file(
        &self,
        file: &Path,
    ) -> ClientResult<ApiResponse<TranscriptionResponse>> {
        let model = self.dispatcher.settings().default_audio_model.clone();
        self.transcribe(TranscriptionRequest::new(model, file)).await
    }
}
