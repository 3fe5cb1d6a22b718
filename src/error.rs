use thiserror::Error;

/// 应用程序错误类型
///
/// 三类错误对应提交流程的三条失败路径：
/// - `EmptyTopic`: 本地校验失败，不会发起任何调用
/// - `ServiceRejected`: 服务正常应答但标记失败，携带服务端消息
/// - `Transport`: 调用本身失败（网络 / 凭证 / 超时 / 解析）
#[derive(Debug, Error)]
pub enum AppError {
    /// 文章主题为空
    #[error("文章主题不能为空")]
    EmptyTopic,
    /// 服务拒绝了请求
    #[error("服务拒绝了请求: {message}")]
    ServiceRejected { message: String },
    /// 传输层错误（用于包装第三方库错误）
    #[error("请求失败: {source}")]
    Transport {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建服务拒绝错误
    pub fn service_rejected(message: impl Into<String>) -> Self {
        AppError::ServiceRejected {
            message: message.into(),
        }
    }

    /// 创建传输层错误
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        AppError::Transport {
            source: source.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::transport(err)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
