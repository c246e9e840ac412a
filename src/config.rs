//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - Azure OpenAI 连接信息（endpoint、API key、API 版本、deployment）

use anyhow::{Context, Result};

/// 默认的 Azure OpenAI API 版本
pub const DEFAULT_API_VERSION: &str = "2025-03-01-preview";

/// 应用配置
///
/// 进程启动时构造一次，之后只读
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// Azure OpenAI 配置
    pub azure: AzureConfig,
}

/// Azure OpenAI 连接配置
#[derive(Clone)]
pub struct AzureConfig {
    /// 资源 endpoint，如 `https://my-resource.openai.azure.com`
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    /// 模型 deployment 名称
    pub deployment: String,
}

// api_key 不进日志
impl std::fmt::Debug for AzureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .finish()
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `GPTRELAY_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `GPTRELAY_PORT`: 服务器监听端口（默认: 7071）
    /// - `AZURE_OPENAI_ENDPOINT`: **必需**
    /// - `AZURE_OPENAI_API_KEY`: **必需**
    /// - `AZURE_OPENAI_API_VERSION`: 默认 `2025-03-01-preview`
    /// - `AZURE_OPENAI_DEPLOYMENT`: **必需**
    ///
    /// # 错误
    ///
    /// - 任一必需变量未设置或为空
    /// - `GPTRELAY_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key-value 来源加载配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("GPTRELAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("GPTRELAY_PORT")
            .unwrap_or_else(|| "7071".to_string())
            .parse()
            .context("GPTRELAY_PORT must be a valid port number")?;

        let azure = AzureConfig::from_lookup(&lookup)?;

        Ok(Self { host, port, azure })
    }
}

impl AzureConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{key} environment variable is required"))
        };

        Ok(Self {
            endpoint: required("AZURE_OPENAI_ENDPOINT")?,
            api_key: required("AZURE_OPENAI_API_KEY")?,
            api_version: lookup("AZURE_OPENAI_API_VERSION")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            deployment: required("AZURE_OPENAI_DEPLOYMENT")?,
        })
    }
}
