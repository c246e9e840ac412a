//! Provider 抽象层
//!
//! 定义上游 LLM 服务的统一接口，handler 只依赖这里的 trait

pub mod azure;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use azure::AzureOpenAIProvider;
pub use types::{
    extract_chat_content, extract_response_text, ChatCompletionRequest, ChatMessage,
    ResponsesRequest, Role,
};

/// Provider Trait - 上游补全服务的统一接口
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider 名称（用于日志和标识）
    fn name(&self) -> &str;
    /// 请求路由到的 deployment / 模型名
    fn deployment(&self) -> &str;
    async fn chat_completion(&self, request: ChatCompletionRequest) -> Result<Value>;
    async fn create_response(&self, request: ResponsesRequest) -> Result<Value>;
}
