//! Shared request dispatcher
//!
//! Builds authenticated HTTP requests, sends them, and unwraps responses
//! into typed results or a uniform error. Every façade delegates here; this
//! is the single place a retry or timeout policy would go if one were added.

use crate::config::Settings;
use crate::models::common::{ApiErrorResponse, ApiResponse, ResponseMetadata};
use crate::utils::error::{ClientError, ClientResult};
use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Response header carrying the organization name
pub const ORGANIZATION_HEADER: &str = "openai-organization";

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Response header carrying the server processing time in milliseconds
pub const PROCESSING_MS_HEADER: &str = "openai-processing-ms";

/// Shared API dispatcher
///
/// Holds the HTTP client and read-only configuration; cloning is cheap and
/// concurrent calls need no locking.
#[derive(Debug, Clone)]
pub struct ApiDispatcher {
    client: Client,
    settings: Settings,
}

impl ApiDispatcher {
    /// Create a new dispatcher from the given configuration
    pub fn new(settings: Settings) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .user_agent(crate::USER_AGENT)
            .build()?;

        Ok(Self { client, settings })
    }

    /// The configuration this dispatcher was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Send a JSON body and deserialize a JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        // Serialized up front so the exact payload is available for error
        // diagnostics
        let request_json = serde_json::to_string(body).map_err(ClientError::Serialization)?;
        let response = self
            .send_raw(Method::POST, path, |req| {
                req.header("Content-Type", "application/json")
                    .body(request_json.clone())
            })
            .await?;

        self.unwrap_response(response, &request_json).await
    }

    /// Fetch and deserialize a JSON response
    pub async fn get<T>(&self, path: &str) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.send_raw(Method::GET, path, |req| req).await?;
        let desc = format!("GET {}", path);
        self.unwrap_response(response, &desc).await
    }

    /// Delete a resource and deserialize the status response
    pub async fn delete<T>(&self, path: &str) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.send_raw(Method::DELETE, path, |req| req).await?;
        let desc = format!("DELETE {}", path);
        self.unwrap_response(response, &desc).await
    }

    /// Upload a multipart form and deserialize a JSON response
    ///
    /// `description` stands in for the request body in error diagnostics,
    /// since a consumed form cannot be replayed verbatim.
    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: Form,
        description: &str,
    ) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .send_raw(Method::POST, path, move |req| req.multipart(form))
            .await?;

        self.unwrap_response(response, description).await
    }

    /// Build and send one authenticated request
    ///
    /// The API key check happens here, before any network activity.
    async fn send_raw<F>(&self, method: Method, path: &str, configure: F) -> ClientResult<Response>
    where
        F: FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    {
        if self.settings.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let url = self.url(path);
        debug!("Sending {} request to {}", method, url);

        let request = self
            .client
            .request(method, &url)
            .header(
                "Authorization",
                format!("Bearer {}", self.settings.api_key),
            );

        let response = configure(request).send().await?;
        Ok(response)
    }

    /// Unwrap a raw response into a typed result or a uniform error
    ///
    /// Exactly one of the two comes out of every call; a success response is
    /// never returned partially populated.
    async fn unwrap_response<T>(
        &self,
        response: Response,
        request_body: &str,
    ) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let meta = extract_metadata(response.headers());

        if status.is_success() {
            let bytes = response.bytes().await?;
            let data: T = serde_json::from_slice(&bytes)?;

            debug!("Request completed successfully with status {}", status);
            Ok(ApiResponse { data, meta })
        } else {
            let body = response.text().await.unwrap_or_default();

            // Try to parse the provider error envelope, fall back to the raw
            // body when it is not JSON
            let detail = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(envelope) => envelope.error.describe(),
                Err(_) if body.is_empty() => "(empty body)".to_string(),
                Err(_) => body,
            };

            error!("API request failed: {} - {}", status, detail);
            Err(ClientError::Api {
                status: status.as_u16(),
                request_body: request_body.to_string(),
                detail,
            })
        }
    }

    /// Join the base URL and an endpoint path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Read metadata headers from a response
///
/// Absent or malformed headers leave the corresponding field at its default
/// rather than failing the call.
fn extract_metadata(headers: &HeaderMap) -> ResponseMetadata {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    let processing_time = headers
        .get(PROCESSING_MS_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or_default();

    ResponseMetadata {
        organization: header_str(ORGANIZATION_HEADER),
        request_id: header_str(REQUEST_ID_HEADER),
        processing_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn dispatcher_with_base(base_url: &str) -> ApiDispatcher {
        let settings = Settings::new("sk-test-key").with_base_url(base_url);
        ApiDispatcher::new(settings).unwrap()
    }

    #[test]
    fn test_url_joining() {
        let dispatcher = dispatcher_with_base("https://api.openai.com/v1");
        assert_eq!(
            dispatcher.url("moderations"),
            "https://api.openai.com/v1/moderations"
        );
        assert_eq!(
            dispatcher.url("/threads/thread_1"),
            "https://api.openai.com/v1/threads/thread_1"
        );

        let dispatcher = dispatcher_with_base("https://api.openai.com/v1/");
        assert_eq!(
            dispatcher.url("moderations"),
            "https://api.openai.com/v1/moderations"
        );
    }

    #[test]
    fn test_metadata_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(ORGANIZATION_HEADER, HeaderValue::from_static("acme"));
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc123"));
        headers.insert(PROCESSING_MS_HEADER, HeaderValue::from_static("42"));

        let meta = extract_metadata(&headers);
        assert_eq!(meta.organization.as_deref(), Some("acme"));
        assert_eq!(meta.request_id.as_deref(), Some("abc123"));
        assert_eq!(meta.processing_time, Duration::from_millis(42));
    }

    #[test]
    fn test_metadata_extraction_missing_headers() {
        let meta = extract_metadata(&HeaderMap::new());
        assert_eq!(meta, ResponseMetadata::default());
    }

    #[test]
    fn test_metadata_extraction_malformed_processing_ms() {
        let mut headers = HeaderMap::new();
        headers.insert(PROCESSING_MS_HEADER, HeaderValue::from_static("fast"));

        let meta = extract_metadata(&headers);
        assert_eq!(meta.processing_time, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_send() {
        // Unroutable base URL: if the check did not happen first, the call
        // would surface a transport error instead
        let settings = Settings::new("").with_base_url("http://127.0.0.1:1");
        let dispatcher = ApiDispatcher::new(settings).unwrap();

        let result = dispatcher
            .get::<serde_json::Value>("threads/thread_1")
            .await;

        assert!(matches!(result, Err(ClientError::MissingApiKey)));
    }
}
