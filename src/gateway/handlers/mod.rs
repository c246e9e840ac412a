//! HTTP 请求处理器

pub mod chat;
pub mod health;
pub mod respond;

pub use chat::handle_chat;
pub use health::handle_health;
pub use respond::handle_respond;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
const TEXT_PLAIN: &str = "text/plain";

/// 纯文本响应，body 原样返回
fn text_response(status: StatusCode, content_type: &'static str, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

fn usage_response(hint: &'static str) -> Response {
    text_response(StatusCode::BAD_REQUEST, TEXT_PLAIN_UTF8, hint.to_string())
}

/// 上游失败统一返回 500，错误链原样暴露给调用方
fn provider_error_response(prefix: &str, err: anyhow::Error) -> Response {
    tracing::error!("Error calling Azure OpenAI: {:#}", err);
    text_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        TEXT_PLAIN_UTF8,
        format!("{}{:#}", prefix, err),
    )
}
