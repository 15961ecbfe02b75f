use reqwest::StatusCode;
use thiserror::Error;

/// 请求失败分类
///
/// 传输层失败（网络、超时、HTTP 错误状态）与业务层失败（信封 `code`
/// 不在 {200, 201} 内）分开表示，两类 401 都会触发本地会话清除。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络、超时或响应体解析失败
    #[error("服务器异常: {0}")]
    Transport(#[from] reqwest::Error),

    /// 服务端返回的 HTTP 错误状态
    #[error("请求失败: HTTP {status}")]
    Status { status: StatusCode },

    /// 业务失败：信封 `code` 不为 200/201
    #[error("{message}")]
    Api { code: i64, message: String },

    /// 请求拦截器报错，请求未发出
    #[error("请求错误: {0}")]
    Interceptor(anyhow::Error),
}

impl ApiError {
    /// 业务失败对应的信封 code
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// 是否为登录态失效（传输层 401 或业务层 code == 401）
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ApiError::Status { status } => *status == StatusCode::UNAUTHORIZED,
            ApiError::Api { code, .. } => *code == 401,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_code() {
        let err = ApiError::Api {
            code: 403,
            message: "无权限".to_string(),
        };
        assert_eq!(err.code(), Some(403));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_classification() {
        let app = ApiError::Api {
            code: 401,
            message: "请先登录".to_string(),
        };
        let transport = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
        };
        assert!(app.is_unauthorized());
        assert!(transport.is_unauthorized());
    }

    #[test]
    fn test_display_uses_message() {
        let err = ApiError::Api {
            code: 500,
            message: "请求失败".to_string(),
        };
        assert_eq!(err.to_string(), "请求失败");
    }
}
