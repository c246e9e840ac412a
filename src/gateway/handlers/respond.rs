//! Responses 接口
//!
//! GET  /respond?q=hello
//! POST /respond  {"input": "hello"}

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use bytes::Bytes;

use super::{provider_error_response, text_response, usage_response, TEXT_PLAIN};
use crate::gateway::{extract::extract_message, state::AppState};
use crate::providers::{extract_response_text, ResponsesRequest};

pub const BODY_FIELD: &str = "input";
pub const USAGE_HINT: &str = r#"Please pass a prompt via ?q=... or JSON body {"input":"..."}"#;
pub const ERROR_PREFIX: &str = "Error: ";

/// GET|POST /respond 处理器
///
/// 回复结构不符时返回原始响应的 JSON 字符串，仍然是 200
pub async fn handle_respond(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let Some(message) = extract_message(&params, &body, BODY_FIELD) else {
        return usage_response(USAGE_HINT);
    };

    let provider = state.provider();
    tracing::info!(
        provider = provider.name(),
        deployment = provider.deployment(),
        message_chars = message.chars().count(),
        "respond"
    );
    let request = ResponsesRequest::single_turn(provider.deployment(), message);

    match provider.create_response(request).await {
        Ok(response) => text_response(
            StatusCode::OK,
            TEXT_PLAIN,
            extract_response_text(&response),
        ),
        Err(err) => provider_error_response(ERROR_PREFIX, err),
    }
}
