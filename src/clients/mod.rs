pub mod generate_client;

pub use generate_client::HttpGenerateClient;

use crate::error::AppResult;
use async_trait::async_trait;

/// 请求执行器能力
///
/// 流程层只依赖这个三态结果：
/// - `Ok(content)`: 服务成功返回文章文本
/// - `Err(ServiceRejected)`: 服务应答但标记失败
/// - `Err(Transport)`: 调用本身失败
#[async_trait]
pub trait GenerateExecutor: Send + Sync {
    async fn execute(&self, prompt: &str, length: u32, bearer_token: &str) -> AppResult<String>;
}
