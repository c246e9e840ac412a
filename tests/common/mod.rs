//! Shared helpers for router-level tests against a mocked Azure OpenAI.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use gptrelay::config::AzureConfig;
use gptrelay::gateway::{build_router, AppState};
use gptrelay::providers::AzureOpenAIProvider;
use tower::ServiceExt;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";
pub const API_VERSION: &str = "2025-03-01-preview";
pub const DEPLOYMENT: &str = "gpt-4o-deployment";

pub fn azure_config(endpoint: &str) -> AzureConfig {
    AzureConfig {
        endpoint: endpoint.to_string(),
        api_key: API_KEY.to_string(),
        api_version: API_VERSION.to_string(),
        deployment: DEPLOYMENT.to_string(),
    }
}

/// Router wired to a provider that points at `server`.
pub fn create_test_app(server: &MockServer) -> Router {
    let provider = AzureOpenAIProvider::new(azure_config(&server.uri()))
        .expect("provider should build");
    build_router(AppState::new(Arc::new(provider)))
}

pub fn chat_completions_path() -> String {
    format!("/openai/deployments/{DEPLOYMENT}/chat/completions")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and collect status, content-type and body text.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}
