//! Router-level tests for `/chat` (chat completions).

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use gptrelay::gateway::chat::USAGE_HINT;
use gptrelay::gateway::{build_router, AppState};
use gptrelay::providers::AzureOpenAIProvider;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Mock that only matches when the outbound user turn is `message`.
async fn mount_completion_for(server: &MockServer, message: &str, reply: &str) {
    Mock::given(method("POST"))
        .and(path(chat_completions_path()))
        .and(query_param("api-version", API_VERSION))
        .and(header("api-key", API_KEY))
        .and(body_partial_json(json!({
            "model": DEPLOYMENT,
            "temperature": 0.7,
            "messages": [
                {"role": "system", "content": "You are a helpful web-based GPT assistant."},
                {"role": "user", "content": message}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(reply)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_with_query_returns_completion_text() {
    let server = MockServer::start().await;
    mount_completion_for(&server, "hello", "Hi there").await;

    let (status, content_type, body) = send(create_test_app(&server), get("/chat?q=hello")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert_eq!(body, "Hi there");
}

#[tokio::test]
async fn test_post_body_message_sends_same_outbound_message() {
    let server = MockServer::start().await;
    mount_completion_for(&server, "hello", "Hi there").await;

    let (status, _, body) = send(
        create_test_app(&server),
        post("/chat", r#"{"message":"hello"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hi there");
}

#[tokio::test]
async fn test_query_takes_precedence_over_body() {
    let server = MockServer::start().await;
    mount_completion_for(&server, "from query", "query won").await;

    let (status, _, body) = send(
        create_test_app(&server),
        post("/chat?q=from%20query", r#"{"message":"from body"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "query won");
}

#[tokio::test]
async fn test_query_with_oversized_body_still_relayed() {
    let server = MockServer::start().await;
    mount_completion_for(&server, "hello", "Hi there").await;

    // Larger than axum's default 2 MB request body limit.
    let body = "x".repeat(3 * 1024 * 1024);
    let (status, _, reply) = send(create_test_app(&server), post("/chat?q=hello", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, "Hi there");
}

#[tokio::test]
async fn test_reply_returned_verbatim() {
    let server = MockServer::start().await;
    let reply = "<b>bold</b> & \"quoted\"\nsecond line";
    mount_completion_for(&server, "markup", reply).await;

    let (_, _, body) = send(create_test_app(&server), get("/chat?q=markup")).await;

    assert_eq!(body, reply);
}

#[tokio::test]
async fn test_missing_message_returns_usage_hint() {
    let server = MockServer::start().await;

    let (status, _, body) = send(create_test_app(&server), get("/chat")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, USAGE_HINT);
    assert!(body.contains("?q=..."));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_json_treated_as_missing() {
    let server = MockServer::start().await;

    let (status, _, body) = send(create_test_app(&server), post("/chat", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, USAGE_HINT);
}

#[tokio::test]
async fn test_wrong_body_field_treated_as_missing() {
    let server = MockServer::start().await;

    let (status, _, _) = send(create_test_app(&server), post("/chat", r#"{"input":"hello"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_provider_error_returns_500_with_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(chat_completions_path()))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":{"code":"401","message":"Access denied"}}"#),
        )
        .mount(&server)
        .await;

    let (status, _, body) = send(create_test_app(&server), get("/chat?q=hello")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error from Azure OpenAI: "), "body: {body}");
    assert!(body.contains("401"));
    assert!(body.contains("Access denied"));
}

#[tokio::test]
async fn test_empty_choices_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(chat_completions_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let (status, _, body) = send(create_test_app(&server), get("/chat?q=hello")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error from Azure OpenAI: "));
}

#[tokio::test]
async fn test_unreachable_provider_returns_500() {
    // Port 1 refuses connections.
    let provider = AzureOpenAIProvider::new(azure_config("http://127.0.0.1:1")).unwrap();
    let app = build_router(AppState::new(Arc::new(provider)));

    let (status, _, body) = send(app, get("/chat?q=hello")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error from Azure OpenAI: "));
    assert!(body.contains("Failed to send request to Azure OpenAI"));
}

#[tokio::test]
async fn test_unsupported_method_rejected() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .method("PUT")
        .uri("/chat?q=hello")
        .body(Body::empty())
        .unwrap();

    let (status, _, _) = send(create_test_app(&server), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
