/// 生成服务 API 客户端
///
/// 封装所有与生成服务相关的 HTTP 调用逻辑
use crate::clients::GenerateExecutor;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// 文章生成端点（相对 base_url）
const GENERATE_ENDPOINT: &str = "/api/ai/generate-article";

/// 生成服务响应体
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    success: bool,
    content: Option<String>,
    message: Option<String>,
}

/// 生成服务客户端
pub struct HttpGenerateClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGenerateClient {
    /// 创建新的生成服务客户端
    ///
    /// base_url 在构造时显式注入，超时策略由客户端统一持有
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }
}

#[async_trait]
impl GenerateExecutor for HttpGenerateClient {
    /// 发起文章生成请求
    ///
    /// # 参数
    /// - `prompt`: 完整提示词
    /// - `length`: 目标字数上限
    /// - `bearer_token`: Bearer 凭证，附加到 Authorization 头
    ///
    /// # 返回
    /// 成功时返回文章文本（原样，不裁剪不重排）
    async fn execute(&self, prompt: &str, length: u32, bearer_token: &str) -> AppResult<String> {
        let url = format!("{}{}", self.base_url, GENERATE_ENDPOINT);

        debug!("正在调用生成服务: {}", url);
        debug!("提示词: {}", prompt);

        let body = json!({
            "prompt": prompt,
            "length": length,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(bearer_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let reply: GenerateResponse = response.json().await?;

        debug!("生成服务调用成功, success={}", reply.success);

        if reply.success {
            // 服务可能返回空文本，视为合法的成功结果
            Ok(reply.content.unwrap_or_default())
        } else {
            Err(AppError::service_rejected(
                reply.message.unwrap_or_else(|| "服务未返回失败原因".to_string()),
            ))
        }
    }
}
