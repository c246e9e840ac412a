//! gptrelay - Azure OpenAI 文本中继服务
//!
//! 两个 HTTP 接口把用户提示词转发到 Azure OpenAI，并以纯文本返回回复：
//!
//! - `/chat`: Chat Completions，固定 system 提示词
//! - `/respond`: Responses，单轮输入

pub mod commands;
pub mod config;
pub mod gateway;
pub mod providers;
