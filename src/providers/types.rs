//! 上游请求类型和回复提取

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat 接口固定的 system 提示词
pub const SYSTEM_PROMPT: &str = "You are a helpful web-based GPT assistant.";

/// Chat 接口固定的 temperature
pub const CHAT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat Completions 请求体
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

impl ChatCompletionRequest {
    /// system 提示词 + 用户消息的两轮请求
    pub fn assistant(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)],
            temperature: CHAT_TEMPERATURE,
        }
    }
}

/// Responses 请求体
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<ChatMessage>,
}

impl ResponsesRequest {
    pub fn single_turn(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: vec![ChatMessage::user(message)],
        }
    }
}

/// 从 Chat Completions 响应中提取 `choices[0].message.content`
///
/// 缺少 choice 或 message 时返回错误；content 为 null 时返回空字符串
pub fn extract_chat_content(response: &Value) -> Result<String> {
    let message = response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .context("Response contains no choices[0].message")?;

    match message.get("content") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

/// 从 Responses 响应中提取 `output[0].content[0].text`
///
/// 结构不符时退化为整个响应的 JSON 字符串，不会失败
pub fn extract_response_text(response: &Value) -> String {
    response
        .get("output")
        .and_then(|o| o.get(0))
        .and_then(|o| o.get("content"))
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("text"))
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            tracing::debug!("response shape unexpected, returning raw body");
            response.to_string()
        })
}
