/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 生成服务的基础URL（显式注入，不依赖进程级全局状态）
    pub api_base_url: String,
    /// 静态 Bearer 凭证
    pub api_token: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            api_token: String::new(),
            request_timeout_secs: 60,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("ARTICLE_API_BASE_URL").unwrap_or(default.api_base_url),
            api_token: std::env::var("ARTICLE_API_TOKEN").unwrap_or(default.api_token),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
