use std::sync::Arc;

use async_trait::async_trait;

use crate::notify::{LogNotifier, Notifier};
use crate::router::Router;
use crate::session::SessionStore;

/// 登录态校验接口
///
/// 守卫不直接依赖具体接口模块；[`crate::api::UserApi`] 提供默认实现
/// （调用 `GET /api/user/info`）。
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// 校验当前登录态是否有效；任何网络失败都按无效处理
    async fn validate(&self) -> bool;
}

/// 导航决策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// 放行，渲染目标页面
    Proceed,
    /// 重定向到其他页面，query 为附加查询参数
    Redirect {
        path: String,
        query: Vec<(String, String)>,
    },
}

impl Navigation {
    /// 无附加参数的重定向
    pub fn redirect(path: impl Into<String>) -> Self {
        Navigation::Redirect {
            path: path.into(),
            query: Vec::new(),
        }
    }
}

/// 全局前置守卫
///
/// 每次导航执行两项检查：已登录用户访问登录页时送回首页；访问
/// `requires_auth` 页面时先做服务端登录校验，未通过则带着原始目标
/// 重定向到登录页。校验失败永远不会向导航流程抛错。
pub struct AuthGuard {
    router: Router,
    session: SessionStore,
    validator: Arc<dyn SessionValidator>,
    notifier: Arc<dyn Notifier>,
}

impl AuthGuard {
    pub fn new(
        router: Router,
        session: SessionStore,
        validator: Arc<dyn SessionValidator>,
    ) -> Self {
        Self {
            router,
            session,
            validator,
            notifier: Arc::new(LogNotifier),
        }
    }

    /// 替换消息提示实现
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// 每次导航前调用；`to` 为完整目标路径（可含查询串）
    pub async fn before_each(&self, to: &str) -> Navigation {
        let path = to.split('?').next().unwrap_or(to);

        // 前往登录页且本地已有会话：校验仍有效则回到首页
        if path == "/login" && self.session.is_logged_in() {
            if self.validator.validate().await {
                return Navigation::redirect("/");
            }
            // 校验未通过（含网络失败）：继续渲染登录页
            log::debug!("登录态已失效，继续渲染登录页");
        }

        if self.router.requires_auth(path) {
            // 无本地会话时直接重定向，不发起校验请求
            if self.session.is_logged_in() && self.validator.validate().await {
                return Navigation::Proceed;
            }
            self.notifier.warning("请先登录");
            return Navigation::Redirect {
                path: "/login".to_string(),
                query: vec![("redirect".to_string(), to.to_string())],
            };
        }

        Navigation::Proceed
    }
}
