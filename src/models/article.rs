//! 文章提交请求模型
//!
//! 包含长度档位表和提交请求，提示词由两者确定性拼接而成

/// 文章长度档位
///
/// 固定三档，顺序即展示顺序，第一档为默认选中项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOption {
    Short,
    Medium,
    Long,
}

impl LengthOption {
    /// 有序档位表，供展示层渲染为可选项
    pub const ALL: [LengthOption; 3] = [
        LengthOption::Short,
        LengthOption::Medium,
        LengthOption::Long,
    ];

    /// 目标字数上限
    pub fn word_ceiling(&self) -> u32 {
        match self {
            LengthOption::Short => 800,
            LengthOption::Medium => 1200,
            LengthOption::Long => 1600,
        }
    }

    /// 展示标签（同时参与提示词拼接）
    pub fn label(&self) -> &'static str {
        match self {
            LengthOption::Short => "Short (500-800 words)",
            LengthOption::Medium => "Medium (800-1200 words)",
            LengthOption::Long => "Long (1200-1600 words)",
        }
    }
}

impl Default for LengthOption {
    fn default() -> Self {
        LengthOption::Short
    }
}

/// 提交请求
///
/// 只保存用户输入（主题 + 选中档位），提示词不单独存储
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    pub topic: String,
    pub length: LengthOption,
}

impl SubmissionRequest {
    pub fn new(topic: impl Into<String>, length: LengthOption) -> Self {
        Self {
            topic: topic.into(),
            length,
        }
    }

    /// 由主题和档位标签确定性拼接提示词
    pub fn prompt(&self) -> String {
        format!("Write an article about {} in {}", self.topic, self.length.label())
    }

    /// 主题是否为空（纯空白视为为空）
    pub fn topic_is_empty(&self) -> bool {
        self.topic.trim().is_empty()
    }
}
