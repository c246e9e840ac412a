//! Gateway 中间件

use axum::{extract::Request, middleware::Next, response::Response};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::Instrument;

/// 全局请求计数器，用于生成 request_id
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 路由对应的 Azure OpenAI 操作，不转发上游的路由记为 "none"
fn upstream_operation(path: &str) -> &'static str {
    match path {
        "/chat" => "chat_completions",
        "/respond" => "responses",
        _ => "none",
    }
}

/// 请求日志中间件
///
/// 每个请求一个 span，结束时记录状态码、耗时，以及该请求是否调用过上游
pub async fn request_logger(request: Request, next: Next) -> Response {
    let request_id = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let operation = upstream_operation(&path);
    let has_query = request.uri().query().is_some_and(|q| !q.is_empty());

    let span = tracing::info_span!(
        "req",
        id = request_id,
        %method,
        %path,
        operation,
    );

    async move {
        let start = std::time::Instant::now();
        let response = next.run(request).await;
        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        // handler 只在调用过上游后返回 200 或 500
        let upstream_called = operation != "none" && matches!(status, 200 | 500);

        tracing::info!(status, latency_ms, has_query, upstream_called, "done");

        response
    }
    .instrument(span)
    .await
}
