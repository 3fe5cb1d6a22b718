//! 提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整生命周期
//!
//! 流程顺序：
//! 1. 校验主题 → 进入 Submitting
//! 2. 获取凭证 → 调用执行器（两步共用一条失败路径）
//! 3. 成功落 Succeeded / 失败落 Failed 并提示用户
//!
//! 互斥保证：在途请求未结束前，再次 submit() 直接拒绝，
//! 不排队、不并行；整个保证仅由 status 字段实现，无需加锁

use tracing::{info, warn};

use crate::clients::GenerateExecutor;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{LengthOption, SubmissionRequest, SubmissionState, SubmissionStatus, SubmitOutcome};
use crate::services::{CredentialProvider, Notifier};
use crate::utils::truncate_text;

/// 提交控制器
///
/// - 编排完整的提交生命周期
/// - 独占持有提交状态，外部仅可读取
/// - 三个协作者（执行器 / 凭证 / 提示）在构造时注入
pub struct SubmissionController<E, C, N> {
    request: SubmissionRequest,
    state: SubmissionState,
    executor: E,
    credentials: C,
    notifier: N,
    verbose_logging: bool,
}

impl<E, C, N> SubmissionController<E, C, N>
where
    E: GenerateExecutor,
    C: CredentialProvider,
    N: Notifier,
{
    /// 创建新的提交控制器，初始状态为 Idle
    pub fn new(config: &Config, executor: E, credentials: C, notifier: N) -> Self {
        Self {
            request: SubmissionRequest::default(),
            state: SubmissionState::new(),
            executor,
            credentials,
            notifier,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 当前提交请求（主题 + 档位）
    pub fn request(&self) -> &SubmissionRequest {
        &self.request
    }

    /// 当前提交状态
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status()
    }

    /// 更新文章主题
    ///
    /// 请求在途时忽略本次编辑（不排队）
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        if self.state.status() == SubmissionStatus::Submitting {
            return;
        }
        self.request.topic = topic.into();
    }

    /// 更新长度档位
    ///
    /// 请求在途时忽略本次编辑（不排队）
    pub fn set_length(&mut self, length: LengthOption) {
        if self.state.status() == SubmissionStatus::Submitting {
            return;
        }
        self.request.length = length;
    }

    /// 发起一次提交
    ///
    /// - 主题为空：返回 `EmptyTopic`，状态不变，不发起调用
    /// - 已有请求在途：返回 `Rejected`，状态不变
    /// - 其余情况：流程走完后状态必为 Succeeded 或 Failed，
    ///   绝不停留在 Submitting
    ///
    /// 返回的 future 必须被轮询到完成；在 await 中途丢弃它
    /// 会使状态停留在 Submitting，后续提交将一直被拒绝
    pub async fn submit(&mut self) -> AppResult<SubmitOutcome> {
        if self.request.topic_is_empty() {
            return Err(AppError::EmptyTopic);
        }

        if !self.state.begin() {
            warn!("⚠️ 已有请求在途，本次提交被拒绝");
            return Ok(SubmitOutcome::Rejected);
        }

        let prompt = self.request.prompt();
        let ceiling = self.request.length.word_ceiling();

        info!("📤 正在提交生成请求");
        if self.verbose_logging {
            info!("提示词: {}", truncate_text(&prompt, 80));
        }

        match self.run_request(&prompt, ceiling).await {
            Ok(content) => {
                info!("✓ 生成完成，共 {} 字符", content.chars().count());
                if self.verbose_logging {
                    info!("内容预览: {}", truncate_text(&content, 80));
                }
                self.state.succeed(content);
            }
            Err(AppError::ServiceRejected { message }) => {
                warn!("❌ 服务拒绝了请求: {}", message);
                self.notifier.notify(&message);
                self.state.fail(message);
            }
            Err(e) => {
                let message = e.to_string();
                warn!("❌ {}", message);
                self.notifier.notify(&message);
                self.state.fail(message);
            }
        }

        Ok(SubmitOutcome::Completed)
    }

    /// 凭证 + 调用，两个顺序异步步骤共用一条失败路径
    async fn run_request(&self, prompt: &str, ceiling: u32) -> AppResult<String> {
        let token = self
            .credentials
            .bearer_token()
            .await
            .map_err(AppError::transport)?;

        self.executor.execute(prompt, ceiling, &token).await
    }
}
