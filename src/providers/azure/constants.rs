//! Azure OpenAI 常量

pub const PROVIDER_NAME: &str = "azure-openai";

/// API key 认证头
pub const API_KEY_HEADER: &str = "api-key";

pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
pub const RESPONSES_PATH: &str = "openai/responses";

pub fn user_agent() -> String {
    format!("gptrelay/{}", env!("CARGO_PKG_VERSION"))
}
