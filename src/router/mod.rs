pub mod guard;

pub use guard::{AuthGuard, Navigation, SessionValidator};

/// 页面导航接口，由宿主实现
///
/// 响应拦截层在传输层 401 时通过它把用户带回登录页。
pub trait Navigator: Send + Sync {
    /// 当前页面路径
    fn current_path(&self) -> String;
    /// 替换当前页面（不入历史栈）
    fn replace(&self, path: &str);
}

/// 默认实现：不做任何跳转，仅记录日志
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn replace(&self, path: &str) {
        log::debug!("忽略页面跳转: {path}");
    }
}

/// 路由元信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    /// 是否需要登录，默认需要
    pub requires_auth: bool,
    /// 菜单标题
    pub title: Option<&'static str>,
    /// 菜单图标
    pub icon: Option<&'static str>,
}

impl Default for RouteMeta {
    fn default() -> Self {
        Self {
            requires_auth: true,
            title: None,
            icon: None,
        }
    }
}

impl RouteMeta {
    /// 需要登录的页面
    pub fn page(title: &'static str, icon: &'static str) -> Self {
        Self {
            requires_auth: true,
            title: Some(title),
            icon: Some(icon),
        }
    }

    /// 无需登录的页面
    pub fn public() -> Self {
        Self {
            requires_auth: false,
            title: None,
            icon: None,
        }
    }
}

/// 路由描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

/// 路由表
///
/// 每个可导航路径恰好属于一个路由描述；未知路径按 NotFound 处理，
/// 不需要登录。
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        debug_assert!(
            {
                let mut paths: Vec<_> = routes.iter().map(|r| r.path).collect();
                paths.sort_unstable();
                paths.windows(2).all(|pair| pair[0] != pair[1])
            },
            "路由路径必须唯一"
        );
        Self { routes }
    }

    /// 平台默认路由表，与页面结构一一对应
    pub fn default_routes() -> Vec<Route> {
        vec![
            Route {
                path: "/",
                name: "home",
                meta: RouteMeta::page("首页", "home"),
            },
            Route {
                path: "/profile",
                name: "profile",
                meta: RouteMeta::page("个人中心", "user"),
            },
            Route {
                path: "/patient",
                name: "patient",
                meta: RouteMeta::page("病历管理", "document-add"),
            },
            Route {
                path: "/image",
                name: "image",
                meta: RouteMeta::page("影像管理", "image"),
            },
            Route {
                path: "/login",
                name: "login",
                meta: RouteMeta::public(),
            },
        ]
    }

    /// 按路径查找路由
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// 目标路径是否需要登录；未知路径放行
    pub fn requires_auth(&self, path: &str) -> bool {
        self.resolve(path)
            .map(|route| route.meta.requires_auth)
            .unwrap_or(false)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Self::default_routes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_auth_flags() {
        let router = Router::default();
        assert!(router.requires_auth("/"));
        assert!(router.requires_auth("/patient"));
        assert!(router.requires_auth("/image"));
        assert!(!router.requires_auth("/login"));
        // 未知路径按 NotFound 处理，放行
        assert!(!router.requires_auth("/no-such-page"));
    }

    #[test]
    fn test_resolve_finds_route() {
        let router = Router::default();
        let route = router.resolve("/profile").unwrap();
        assert_eq!(route.name, "profile");
        assert_eq!(route.meta.title, Some("个人中心"));
    }

    #[test]
    fn test_meta_defaults_to_requiring_auth() {
        assert!(RouteMeta::default().requires_auth);
    }
}
