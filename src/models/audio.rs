//! Audio transcription data models
//!
//! Request and response structures for the `/audio/transcriptions` endpoint

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audio transcription request
///
/// Sent as a multipart form rather than a JSON body; optional fields that are
/// unset produce no form part at all.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Path to the audio file to upload
    pub file: PathBuf,
    /// Model name
    pub model: String,
    /// Text to guide the model's style (optional)
    pub prompt: Option<String>,
    /// Input language as an ISO-639-1 code (optional)
    pub language: Option<String>,
    /// Sampling temperature (optional)
    pub temperature: Option<f32>,
}

impl TranscriptionRequest {
    /// Transcribe the given file with the given model
    pub fn new(model: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            model: model.into(),
            prompt: None,
            language: None,
            temperature: None,
        }
    }

    /// Short description used in error diagnostics, since a multipart form
    /// cannot be replayed verbatim
    pub fn describe(&self) -> String {
        format!("transcription of {} with {}", self.file.display(), self.model)
    }
}

/// Audio transcription response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// The transcribed text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_names_file_and_model() {
        let request = TranscriptionRequest::new("whisper-1", "/tmp/clip.mp3");
        let text = request.describe();
        assert!(text.contains("clip.mp3"));
        assert!(text.contains("whisper-1"));
    }

    #[test]
    fn test_response_parsing() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text":"hello world"}"#).unwrap();
        assert_eq!(parsed.text, "hello world");
    }
}
