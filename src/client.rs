use std::sync::Arc;

use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::interceptor::{AuthInterceptor, Interceptor};
use crate::notify::{LogNotifier, Notifier};
use crate::router::{Navigator, NoopNavigator};
use crate::session::SessionStore;
use crate::types::{Body, Envelope};

/// 共享 HTTP 客户端
///
/// 所有 API 模块复用同一个实例；克隆成本仅为一次 Arc 计数。请求在
/// 发出前依次经过拦截器链（认证拦截器总在最前），响应在交付调用方
/// 前统一做传输层与业务层分类：
///
/// - 传输层 401：清除会话，当前页面不是登录页时跳转登录页；
/// - 其他传输层失败：提示错误并拒绝；
/// - 信封 `code` ∉ {200, 201}：401 额外清除会话，提示 `message`
///   （缺失时用通用文案）并拒绝；
/// - 其余情况：交付整个信封。
#[derive(Clone)]
pub struct HidocClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    interceptors: Vec<Arc<dyn Interceptor>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

/// [`HidocClient`] 构建器
pub struct HidocClientBuilder {
    config: ClientConfig,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    extra_interceptors: Vec<Arc<dyn Interceptor>>,
}

impl HidocClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: SessionStore::in_memory(),
            notifier: Arc::new(LogNotifier),
            navigator: Arc::new(NoopNavigator),
            extra_interceptors: Vec::new(),
        }
    }

    /// 替换会话存储（默认进程内存储）
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    /// 替换消息提示实现
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// 替换页面导航实现
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// 追加自定义拦截器，排在认证拦截器之后
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.extra_interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<HidocClient, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(self.config.default_timeout)
            // withCredentials 等价物：跨域请求带上 Cookie
            .cookie_store(true)
            .build()?;

        let mut interceptors: Vec<Arc<dyn Interceptor>> =
            vec![Arc::new(AuthInterceptor::new(self.session.clone()))];
        interceptors.extend(self.extra_interceptors);

        Ok(HidocClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.config.base_url,
                session: self.session,
                interceptors,
                notifier: self.notifier,
                navigator: self.navigator,
            }),
        })
    }
}

impl HidocClient {
    pub fn builder(config: ClientConfig) -> HidocClientBuilder {
        HidocClientBuilder::new(config)
    }

    /// 客户端共享的会话存储
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// 统一请求入口
    ///
    /// `path` 为相对路径（如 `/api/user/info`）；`query` 为扁平的查询
    /// 参数对象。成功时交付整个响应信封。
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<Value>,
        body: Option<Body>,
    ) -> Result<Envelope, ApiError> {
        let inner = &self.inner;
        let url = join_url(&inner.base_url, path);
        log::debug!("{method} {url}");

        let mut builder = inner.http.request(method, url);
        if let Some(query) = &query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = match body {
                Body::Json(value) => builder.json(&value),
                Body::Multipart(form) => builder.multipart(form),
            };
        }

        for interceptor in &inner.interceptors {
            builder = interceptor
                .before_request(builder, path)
                .await
                .map_err(|e| {
                    log::error!("请求错误: {e}");
                    ApiError::Interceptor(e)
                })?;
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                self.notify_transport(&e);
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(self.http_failure(status));
        }

        let envelope: Envelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                self.notify_transport(&e);
                return Err(ApiError::Transport(e));
            }
        };

        self.resolve_envelope(envelope)
    }

    /// 传输层失败提示：优先错误自身信息，缺失时用通用文案
    fn notify_transport(&self, e: &reqwest::Error) {
        log::error!("响应错误: {e}");
        let message = e.to_string();
        if message.is_empty() {
            self.inner.notifier.error("服务器异常");
        } else {
            self.inner.notifier.error(&message);
        }
    }

    /// 传输层失败：401 清会话并跳转登录页，其余仅提示
    fn http_failure(&self, status: StatusCode) -> ApiError {
        let inner = &self.inner;
        if status == StatusCode::UNAUTHORIZED {
            inner.session.clear_user_info();
            if inner.navigator.current_path() != "/login" {
                inner.navigator.replace("/login");
            }
        }
        let err = ApiError::Status { status };
        log::error!("响应错误: {err}");
        inner.notifier.error(&err.to_string());
        err
    }

    /// 业务层分类：成功交付整个信封，失败提示并拒绝
    fn resolve_envelope(&self, envelope: Envelope) -> Result<Envelope, ApiError> {
        if envelope.is_success() {
            return Ok(envelope);
        }
        if envelope.is_unauthorized() {
            self.inner.session.clear_user_info();
        }
        let code = envelope.code.unwrap_or(-1);
        let message = envelope
            .message
            .unwrap_or_else(|| "请求失败".to_string());
        self.inner.notifier.error(&message);
        Err(ApiError::Api { code, message })
    }

    pub async fn get(&self, path: &str, query: Option<Value>) -> Result<Envelope, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, data: Option<Value>) -> Result<Envelope, ApiError> {
        self.request(Method::POST, path, None, data.map(Body::Json))
            .await
    }

    pub async fn put(&self, path: &str, data: Option<Value>) -> Result<Envelope, ApiError> {
        self.request(Method::PUT, path, None, data.map(Body::Json))
            .await
    }

    /// DELETE 请求；部分接口（如标注删除）在请求体里携带参数
    pub async fn delete(&self, path: &str, data: Option<Value>) -> Result<Envelope, ApiError> {
        self.request(Method::DELETE, path, None, data.map(Body::Json))
            .await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Envelope, ApiError> {
        self.request(Method::POST, path, None, Some(Body::Multipart(form)))
            .await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::test_support::RecordingNotifier;
    use crate::router::Navigator;
    use crate::session::UserInfo;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// 记录跳转目标的导航桩
    #[derive(Default)]
    struct RecordingNavigator {
        current: String,
        replaced: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn at(path: &str) -> Self {
            Self {
                current: path.to_string(),
                replaced: Mutex::new(Vec::new()),
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> String {
            self.current.clone()
        }

        fn replace(&self, path: &str) {
            self.replaced
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(path.to_string());
        }
    }

    struct Fixture {
        client: HidocClient,
        session: SessionStore,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn fixture_at(current_path: &str) -> Fixture {
        let session = SessionStore::in_memory();
        let user = UserInfo::from_value(&json!({ "token": "abc" })).unwrap();
        session.set_user_info(&user);

        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::at(current_path));
        let client = HidocClient::builder(ClientConfig::default())
            .session(session.clone())
            .notifier(notifier.clone())
            .navigator(navigator.clone())
            .build()
            .unwrap();
        Fixture {
            client,
            session,
            notifier,
            navigator,
        }
    }

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:9888/", "/api/login"),
            "http://localhost:9888/api/login"
        );
        assert_eq!(
            join_url("https://hidoc.ember.ac.cn/api", "user/info"),
            "https://hidoc.ember.ac.cn/api/user/info"
        );
    }

    #[test]
    fn test_success_envelope_resolves_whole_envelope() {
        let fixture = fixture_at("/");
        let result = fixture
            .client
            .resolve_envelope(envelope(json!({ "code": 200, "data": { "id": 1 } })))
            .unwrap();

        // 调用方拿到完整信封
        assert_eq!(result.code, Some(200));
        assert_eq!(result.data, Some(json!({ "id": 1 })));
        assert!(fixture.notifier.errors.lock().unwrap().is_empty());
    }

    #[test]
    fn test_code_201_and_missing_code_resolve() {
        let fixture = fixture_at("/");
        assert!(fixture
            .client
            .resolve_envelope(envelope(json!({ "code": 201 })))
            .is_ok());
        assert!(fixture
            .client
            .resolve_envelope(envelope(json!({ "data": [] })))
            .is_ok());
    }

    #[test]
    fn test_failure_envelope_rejects_and_notifies() {
        let fixture = fixture_at("/");
        let err = fixture
            .client
            .resolve_envelope(envelope(json!({ "code": 400, "message": "参数错误" })))
            .unwrap_err();

        assert_eq!(err.code(), Some(400));
        assert_eq!(
            *fixture.notifier.errors.lock().unwrap(),
            vec!["参数错误".to_string()]
        );
        // 非 401 不影响会话
        assert!(fixture.session.is_logged_in());
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let fixture = fixture_at("/");
        let err = fixture
            .client
            .resolve_envelope(envelope(json!({ "code": 500 })))
            .unwrap_err();

        assert_eq!(err.to_string(), "请求失败");
    }

    #[test]
    fn test_application_401_clears_session() {
        let fixture = fixture_at("/");
        let err = fixture
            .client
            .resolve_envelope(envelope(json!({ "code": 401, "message": "请先登录" })))
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert!(!fixture.session.is_logged_in());
        // 业务层 401 只清会话，不做页面跳转
        assert!(fixture.navigator.replaced.lock().unwrap().is_empty());
    }

    #[test]
    fn test_transport_401_clears_session_and_redirects() {
        let fixture = fixture_at("/patient");
        let err = fixture.client.http_failure(StatusCode::UNAUTHORIZED);

        assert!(err.is_unauthorized());
        assert!(!fixture.session.is_logged_in());
        assert_eq!(
            *fixture.navigator.replaced.lock().unwrap(),
            vec!["/login".to_string()]
        );
    }

    #[test]
    fn test_transport_401_on_login_page_does_not_redirect() {
        let fixture = fixture_at("/login");
        fixture.client.http_failure(StatusCode::UNAUTHORIZED);

        assert!(fixture.navigator.replaced.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_notifies_with_error_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        // 不可达地址，请求立刻失败
        let client = HidocClient::builder(
            ClientConfig::default().with_base_url("http://127.0.0.1:1"),
        )
        .notifier(notifier.clone())
        .build()
        .unwrap();

        let err = client.get("/api/user/info", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        // 提示内容为错误自身信息，而不是固定的通用文案
        let errors = notifier.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].is_empty());
        assert_ne!(errors[0], "服务器异常");
    }

    #[test]
    fn test_other_http_failure_notifies_without_touching_session() {
        let fixture = fixture_at("/");
        let err = fixture.client.http_failure(StatusCode::INTERNAL_SERVER_ERROR);

        assert!(!err.is_unauthorized());
        assert!(fixture.session.is_logged_in());
        assert_eq!(fixture.notifier.errors.lock().unwrap().len(), 1);
    }
}
