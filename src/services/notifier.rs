/// 用户提示服务
///
/// 只在失败结果上触发，即发即忘，不参与流程状态
use tracing::warn;

/// 失败提示能力
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// 基于日志的提示实现
///
/// 以 warn 级别向用户瞬时展示失败消息
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!("⚠️ {}", message);
    }
}
