use std::time::Duration;

use async_trait::async_trait;

use crate::interceptor::Interceptor;
use crate::session::SessionStore;

/// AI 相关接口的超时时间（120 秒）
pub const AI_TIMEOUT: Duration = Duration::from_secs(120);
/// 影像相关接口的超时时间（10 分钟）
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(600);

/// 认证拦截器
///
/// 按端点族覆盖请求超时，并为已登录会话附加 `Authorization` 头。
/// 会话 blob 损坏时按未登录处理（[`SessionStore::user_info`] 已经
/// 吞掉解析错误），不会让请求失败。
pub struct AuthInterceptor {
    session: SessionStore,
}

impl AuthInterceptor {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// 计算指定路径的请求超时；无特殊规则时返回 None（用客户端默认值）
    ///
    /// 规则按声明顺序依次判定，影像规则在最后，路径同时命中 AI 与
    /// 影像标记时以影像超时为准。
    fn timeout_for(path: &str) -> Option<Duration> {
        let mut timeout = None;
        if path.contains("/ai/") || path.contains("/ai-chat/") {
            timeout = Some(AI_TIMEOUT);
        }
        if path.contains("/image/") {
            timeout = Some(IMAGE_TIMEOUT);
        }
        timeout
    }
}

#[async_trait]
impl Interceptor for AuthInterceptor {
    async fn before_request(
        &self,
        mut request: reqwest::RequestBuilder,
        path: &str,
    ) -> anyhow::Result<reqwest::RequestBuilder> {
        if let Some(timeout) = Self::timeout_for(path) {
            log::debug!("端点 {path} 超时调整为 {timeout:?}");
            request = request.timeout(timeout);
        }

        if let Some(token) = self.session.token() {
            request = request.header("Authorization", token);
        }

        Ok(request)
    }
}
