//! 提交生命周期状态机
//!
//! 状态迁移：
//! - `Idle --begin--> Submitting`
//! - `Submitting --succeed--> Succeeded`
//! - `Submitting --fail--> Failed`
//! - `Succeeded / Failed --begin--> Submitting`（可无限重入）
//!
//! 不变式：`content` 与 `error_message` 至多一个有值，
//! 且始终与 `status` 一致

/// 提交生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// 初始状态，尚未提交
    Idle,
    /// 请求进行中（唯一的挂起点）
    Submitting,
    /// 提交成功，`content` 保存返回文本
    Succeeded,
    /// 提交失败，`error_message` 保存失败消息
    Failed,
}

/// 一次 submit() 调用的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 流程完整走完（成功或失败均算完成）
    Completed,
    /// 已有请求在途，本次提交被拒绝
    Rejected,
}

/// 提交状态
///
/// 只能通过自身的迁移方法变更，外部仅可读取
#[derive(Debug, Clone)]
pub struct SubmissionState {
    status: SubmissionStatus,
    content: String,
    error_message: Option<String>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            content: String::new(),
            error_message: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// 返回文本，仅在 `Succeeded` 时非空语义有效
    pub fn content(&self) -> &str {
        &self.content
    }

    /// 失败消息，仅在 `Failed` 时有值
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// 进入 `Submitting`
    ///
    /// 已在 `Submitting` 时拒绝（返回 false，不做任何变更）；
    /// 接受时清空上一次的返回文本和失败消息
    pub fn begin(&mut self) -> bool {
        if self.status == SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        self.content.clear();
        self.error_message = None;
        true
    }

    /// 迁移到 `Succeeded`，原样保存返回文本
    pub fn succeed(&mut self, content: String) {
        self.status = SubmissionStatus::Succeeded;
        self.content = content;
        self.error_message = None;
    }

    /// 迁移到 `Failed`，保存失败消息
    pub fn fail(&mut self, message: String) {
        self.status = SubmissionStatus::Failed;
        self.content.clear();
        self.error_message = Some(message);
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::new()
    }
}
