//! 健康检查处理器

use axum::{extract::State, Json};
use serde::Serialize;

use crate::gateway::state::AppState;

/// 健康检查响应
#[derive(Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    version: &'static str,
    provider: &'a str,
    deployment: &'a str,
}

/// GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let provider = state.provider();

    Json(serde_json::json!(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider: provider.name(),
        deployment: provider.deployment(),
    }))
}
