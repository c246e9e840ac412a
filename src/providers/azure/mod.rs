//! Azure OpenAI Provider
//!
//! 基于 API key 认证，支持 Chat Completions 和 Responses 两种接口

mod constants;

use anyhow::{Context, Result};
use async_trait::async_trait;
use http::{header, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::AzureConfig;
use crate::providers::{ChatCompletionRequest, Provider, ResponsesRequest};

use constants::{API_KEY_HEADER, CHAT_COMPLETIONS_PATH, PROVIDER_NAME, RESPONSES_PATH};

pub struct AzureOpenAIProvider {
    config: AzureConfig,
    client: Client,
}

impl AzureOpenAIProvider {
    /// 创建 Provider
    ///
    /// 不覆盖 reqwest 默认超时，请求失败不重试
    pub fn new(config: AzureConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(constants::user_agent())
            .default_headers(build_headers(&config.api_key)?)
            .build()
            .context("Failed to create Azure OpenAI client")?;

        Ok(Self { config, client })
    }

    fn base_url(&self) -> &str {
        self.config.endpoint.trim_end_matches('/')
    }

    /// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=...`
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/{}?api-version={}",
            self.base_url(),
            urlencoding::encode(&self.config.deployment),
            CHAT_COMPLETIONS_PATH,
            urlencoding::encode(&self.config.api_version),
        )
    }

    /// `{endpoint}/openai/responses?api-version=...`
    pub fn responses_url(&self) -> String {
        format!(
            "{}/{}?api-version={}",
            self.base_url(),
            RESPONSES_PATH,
            urlencoding::encode(&self.config.api_version),
        )
    }

    /// 发送请求的公共逻辑
    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request to Azure OpenAI")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Azure OpenAI API error {}: {}", status, error_body);
        }

        response
            .json()
            .await
            .context("Failed to parse Azure OpenAI response")
    }
}

#[async_trait]
impl Provider for AzureOpenAIProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn deployment(&self) -> &str {
        &self.config.deployment
    }

    async fn chat_completion(&self, request: ChatCompletionRequest) -> Result<Value> {
        let url = self.chat_completions_url();
        self.post_json(&url, &request).await
    }

    async fn create_response(&self, request: ResponsesRequest) -> Result<Value> {
        let url = self.responses_url();
        self.post_json(&url, &request).await
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    let mut key = HeaderValue::from_str(api_key).context("Invalid API key for header")?;
    key.set_sensitive(true);
    map.insert(API_KEY_HEADER, key);

    map.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    map.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    Ok(map)
}
