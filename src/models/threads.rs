//! Thread and message data models
//!
//! Request and response structures for the `/threads` endpoint and its
//! messages sub-resource

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arbitrary key/value annotations attached to threads and messages
///
/// The provider documents a 16-key limit; the client does not enforce it and
/// serializes whatever map it is given, leaving the verdict to the server.
pub type Metadata = HashMap<String, String>;

/// Thread creation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadRequest {
    /// Messages to seed the thread with (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<MessageRequest>>,
    /// Metadata annotations (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ThreadRequest {
    /// An empty thread with no seed messages and no metadata
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach metadata to the request
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Thread metadata update request
///
/// Metadata is the only mutable thread attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadModifyRequest {
    /// Replacement metadata
    pub metadata: Metadata,
}

/// Thread object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadObject {
    /// Thread ID
    pub id: String,
    /// Object type, always "thread"
    pub object: String,
    /// Creation timestamp
    pub created_at: u64,
    /// Metadata annotations
    #[serde(default)]
    pub metadata: Metadata,
}

/// Message creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Author role, "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
    /// Metadata annotations (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl MessageRequest {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            metadata: None,
        }
    }
}

/// Message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageObject {
    /// Message ID
    pub id: String,
    /// Object type, always "thread.message"
    pub object: String,
    /// Creation timestamp
    pub created_at: u64,
    /// Owning thread ID
    pub thread_id: String,
    /// Author role
    pub role: String,
    /// Content blocks
    pub content: Vec<MessageContent>,
    /// Metadata annotations
    #[serde(default)]
    pub metadata: Metadata,
}

/// Message content block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessageContent {
    /// Text block
    #[serde(rename = "text")]
    Text {
        /// Text payload
        text: MessageText,
    },
}

/// Text payload of a message content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageText {
    /// The text value
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_thread_request_serializes_to_empty_object() {
        let request = ThreadRequest::empty();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_metadata_is_not_truncated() {
        let mut metadata = Metadata::new();
        for i in 0..20 {
            metadata.insert(format!("key-{}", i), format!("value-{}", i));
        }

        let request = ThreadRequest::empty().with_metadata(metadata);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["metadata"].as_object().unwrap().len(), 20);
    }

    #[test]
    fn test_thread_object_parsing_defaults_metadata() {
        let body = r#"{"id":"thread_abc","object":"thread","created_at":1700000000}"#;
        let parsed: ThreadObject = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.id, "thread_abc");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_message_content_parsing() {
        let body = r#"{
            "id": "msg_1",
            "object": "thread.message",
            "created_at": 1700000000,
            "thread_id": "thread_abc",
            "role": "user",
            "content": [{"type": "text", "text": {"value": "hello"}}],
            "metadata": {}
        }"#;

        let parsed: MessageObject = serde_json::from_str(body).unwrap();
        let MessageContent::Text { text } = &parsed.content[0];
        assert_eq!(text.value, "hello");
    }
}
