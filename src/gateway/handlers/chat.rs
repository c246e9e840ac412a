//! Chat Completions 接口
//!
//! GET  /chat?q=hello
//! POST /chat  {"message": "hello"}

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use bytes::Bytes;

use super::{provider_error_response, text_response, usage_response, TEXT_PLAIN_UTF8};
use crate::gateway::{extract::extract_message, state::AppState};
use crate::providers::{extract_chat_content, ChatCompletionRequest};

pub const BODY_FIELD: &str = "message";
pub const USAGE_HINT: &str = r#"Please send your prompt via ?q=... or JSON body {"message":"..."}"#;
pub const ERROR_PREFIX: &str = "Error from Azure OpenAI: ";

/// GET|POST /chat 处理器
pub async fn handle_chat(
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
        "chat"
    );
    let request = ChatCompletionRequest::assistant(provider.deployment(), message);

    let result: anyhow::Result<String> = async {
        let response = provider.chat_completion(request).await?;
        extract_chat_content(&response)
    }
    .await;

    match result {
        Ok(answer) => text_response(StatusCode::OK, TEXT_PLAIN_UTF8, answer),
        Err(err) => provider_error_response(ERROR_PREFIX, err),
    }
}
