//! Shared API data models
//!
//! Error envelope, response metadata and generic wrappers used by every
//! capability

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider error response envelope
///
/// The body shape of every non-2xx response: `{"error": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error information
    pub error: ApiErrorDetail,
}

/// Provider error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Error message
    #[serde(default)]
    pub message: Option<String>,
    /// Error type/category
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Offending parameter name (optional)
    #[serde(default)]
    pub param: Option<String>,
    /// Error code (optional)
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorDetail {
    /// Render the envelope as a single diagnostic line
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(code) = &self.code {
            parts.push(format!("code={}", code));
        }
        if let Some(error_type) = &self.error_type {
            parts.push(format!("type={}", error_type));
        }
        if let Some(param) = &self.param {
            parts.push(format!("param={}", param));
        }
        let message = self.message.as_deref().unwrap_or("(no message)");
        if parts.is_empty() {
            message.to_string()
        } else {
            format!("{} [{}]", message, parts.join(", "))
        }
    }
}

/// Response attributes sourced from HTTP headers rather than the JSON body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Value of the `Openai-Organization` header
    pub organization: Option<String>,
    /// Value of the `X-Request-ID` header
    pub request_id: Option<String>,
    /// Value of the `Openai-Processing-Ms` header, as a duration
    pub processing_time: Duration,
}

/// A deserialized response body together with its header metadata
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The typed response body
    pub data: T,
    /// Metadata read from response headers
    pub meta: ResponseMetadata,
}

impl<T> ApiResponse<T> {
    /// Discard the metadata and keep the body
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Response body of a DELETE operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionStatus {
    /// Identifier of the deleted object
    pub id: String,
    /// Object type marker (e.g. "thread.deleted")
    pub object: String,
    /// Whether the deletion took effect
    pub deleted: bool,
}

/// Generic list envelope used by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Object type marker, always "list"
    pub object: String,
    /// The listed items
    pub data: Vec<T>,
    /// Identifier of the first item (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_id: Option<String>,
    /// Identifier of the last item (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,
    /// Whether more items are available
    #[serde(default)]
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_parsing() {
        let body = r#"{"error":{"code":"invalid_api_key","message":"bad key","param":null,"type":"invalid_request_error"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.error.code.as_deref(), Some("invalid_api_key"));
        assert_eq!(parsed.error.message.as_deref(), Some("bad key"));
        assert_eq!(parsed.error.param, None);
        assert_eq!(
            parsed.error.error_type.as_deref(),
            Some("invalid_request_error")
        );
    }

    #[test]
    fn test_error_detail_describe() {
        let detail = ApiErrorDetail {
            message: Some("bad key".to_string()),
            error_type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("invalid_api_key".to_string()),
        };

        let text = detail.describe();
        assert!(text.contains("bad key"));
        assert!(text.contains("code=invalid_api_key"));
        assert!(text.contains("type=invalid_request_error"));
    }

    #[test]
    fn test_error_detail_describe_empty_envelope() {
        let detail = ApiErrorDetail {
            message: None,
            error_type: None,
            param: None,
            code: None,
        };
        assert_eq!(detail.describe(), "(no message)");
    }

    #[test]
    fn test_metadata_defaults() {
        let meta = ResponseMetadata::default();
        assert_eq!(meta.organization, None);
        assert_eq!(meta.request_id, None);
        assert_eq!(meta.processing_time, Duration::ZERO);
    }
}
