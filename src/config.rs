use std::env;
use std::time::Duration;

/// 默认请求超时（60 秒），可被拦截器按端点族覆盖
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// 构建环境，决定默认的 API 基础地址
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Local,
}

impl Environment {
    /// 从 `HIDOC_ENV` 环境变量推断当前环境，未设置时取本地环境
    pub fn from_env() -> Self {
        match env::var("HIDOC_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Local,
        }
    }

    /// 该环境对应的 API 基础地址
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://hidoc.ember.ac.cn/api",
            Environment::Local => "http://localhost:9888/",
        }
    }
}

/// 共享客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API 基础地址
    pub base_url: String,
    /// 默认请求超时
    pub default_timeout: Duration,
}

impl ClientConfig {
    /// 指定环境的默认配置
    pub fn new(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// 按环境变量构造配置
    ///
    /// `HIDOC_ENV` 选择环境，`HIDOC_API_BASE_URL` 可直接覆盖基础地址。
    pub fn from_env() -> Self {
        let mut config = Self::new(Environment::from_env());
        if let Ok(base_url) = env::var("HIDOC_API_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }

    /// 覆盖基础地址
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 覆盖默认超时
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Environment::from_env())
    }
}
