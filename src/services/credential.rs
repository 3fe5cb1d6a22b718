/// 凭证服务
///
/// 封装 Bearer 凭证的获取逻辑，每次出站调用前取一次
use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;

/// 凭证提供能力
///
/// 获取可能挂起（如向外部身份服务换取短期令牌），
/// 失败与后续调用失败合并为同一条失败路径
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String>;
}

/// 静态凭证提供者
///
/// 直接返回配置中的固定令牌
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// 创建新的静态凭证提供者
    pub fn new(config: &Config) -> Self {
        Self {
            token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String> {
        if self.token.is_empty() {
            anyhow::bail!("未配置 API 凭证 (ARTICLE_API_TOKEN)");
        }
        Ok(self.token.clone())
    }
}
