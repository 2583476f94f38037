//! Moderation façade tests

use aiapiclient::models::moderation::{ModerationInput, ModerationRequest};
use aiapiclient::{ApiDispatcher, ModerationApi, ModerationClient, Settings};
use httpmock::prelude::*;

fn client(base_url: &str) -> ModerationClient {
    let settings = Settings::new("sk-test-key").with_base_url(base_url);
    ModerationClient::new(ApiDispatcher::new(settings).expect("dispatcher"))
}

const RESPONSE_BODY: &str = r#"{
    "id": "modr-1",
    "model": "text-moderation-007",
    "results": [{
        "flagged": true,
        "categories": {"violence": true},
        "category_scores": {"violence": 0.97}
    }]
}"#;

/// The convenience call fills in the one canonical default model
#[tokio::test]
async fn classify_text_uses_canonical_default_model() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/moderations").json_body(serde_json::json!({
                "input": "hello",
                "model": "text-moderation-latest"
            }));
            then.status(200)
                .header("Content-Type", "application/json")
                .body(RESPONSE_BODY);
        })
        .await;

    let response = client(&server.base_url())
        .classify_text("hello")
        .await
        .expect("success");

    mock.assert_async().await;
    assert!(response.data.results[0].flagged);
}

/// A configured override replaces the default model
#[tokio::test]
async fn classify_text_honors_configured_model() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/moderations").json_body(serde_json::json!({
                "input": "hello",
                "model": "omni-moderation-latest"
            }));
            then.status(200)
                .header("Content-Type", "application/json")
                .body(RESPONSE_BODY);
        })
        .await;

    let settings = Settings::new("sk-test-key")
        .with_base_url(server.base_url())
        .with_moderation_model("omni-moderation-latest");
    let client = ModerationClient::new(ApiDispatcher::new(settings).expect("dispatcher"));

    client.classify_text("hello").await.expect("success");
    mock.assert_async().await;
}

/// Batch input is serialized as an array and classified per item
#[tokio::test]
async fn batch_input_is_serialized_as_array() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/moderations").json_body(serde_json::json!({
                "input": ["first", "second"]
            }));
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{
                    "id": "modr-2",
                    "model": "text-moderation-007",
                    "results": [
                        {"flagged": false, "categories": {}, "category_scores": {}},
                        {"flagged": true, "categories": {"violence": true}, "category_scores": {"violence": 0.9}}
                    ]
                }"#);
        })
        .await;

    let request = ModerationRequest {
        input: ModerationInput::Batch(vec!["first".to_string(), "second".to_string()]),
        model: None,
    };
    let response = client(&server.base_url())
        .classify(request)
        .await
        .expect("success");

    mock.assert_async().await;
    assert_eq!(response.data.results.len(), 2);
    assert!(!response.data.results[0].flagged);
    assert!(response.data.results[1].flagged);
}
