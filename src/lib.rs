//! # Write Article
//!
//! 一个用于 AI 文章生成提交的 Rust 库
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装远程生成服务的 HTTP 调用，只暴露能力
//! - `HttpGenerateClient` - 唯一的网络调用方，提供 execute() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次协作
//! - `CredentialProvider` - 获取 Bearer 凭证能力
//! - `Notifier` - 向用户提示失败消息能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整生命周期
//! - `SubmissionController` - 流程编排（校验 → 凭证 → 调用 → 落状态）
//!
//! ### ④ 内容层（Content）
//! - `content/` - 把返回的原始文本分类为可渲染的内容块
//! - `classify` - 纯函数，按行分类（标题 / 列表项 / 分隔线 / 段落）
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{GenerateExecutor, HttpGenerateClient};
pub use config::Config;
pub use content::{classify, ContentBlock};
pub use error::{AppError, AppResult};
pub use models::{
    LengthOption, SubmissionRequest, SubmissionState, SubmissionStatus, SubmitOutcome,
};
pub use services::{CredentialProvider, Notifier, StaticTokenProvider, TracingNotifier};
pub use workflow::SubmissionController;
