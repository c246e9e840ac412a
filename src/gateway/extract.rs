//! 从请求中提取用户消息

use std::collections::HashMap;

use serde_json::Value;

/// 查询参数名（两个接口相同）
pub const QUERY_KEY: &str = "q";

/// 从查询参数或 JSON 请求体中提取消息
///
/// 非空的 `q` 优先，此时不读取请求体。否则尝试把请求体解析为 JSON
/// 对象并读取 `field` 字段。解析失败、字段缺失、非字符串或空字符串
/// 都视为没有消息，不会返回解析错误。
pub fn extract_message(
    query: &HashMap<String, String>,
    body: &[u8],
    field: &str,
) -> Option<String> {
    if let Some(q) = query.get(QUERY_KEY).filter(|q| !q.is_empty()) {
        return Some(q.clone());
    }

    if body.is_empty() {
        return None;
    }

    let json: Value = match serde_json::from_slice(body) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring invalid JSON body");
            return None;
        }
    };

    json.get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
