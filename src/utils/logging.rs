/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 级别由 RUST_LOG 控制，默认 info；重复调用时忽略后续初始化
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `api_base_url`: 生成服务基础URL
pub fn log_startup(api_base_url: &str) {
    tracing::info!("{}", "=".repeat(60));
    tracing::info!("🚀 程序启动 - 文章生成提交模式");
    tracing::info!("🌐 生成服务: {}", api_base_url);
    tracing::info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
