use serde::Deserialize;
use serde_json::Value;

/// 后端统一响应信封
///
/// 接口约定：`code` 缺失或等于 200/201 表示成功，其余 code 为业务失败，
/// 其中 401 表示登录态失效。成功路径向调用方交付整个信封而非仅 `data`
/// 字段，调用方自行取用 `data` 与 `message`。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    /// 业务状态码，部分接口（如文件预览）可能缺失
    pub code: Option<i64>,
    /// 提示信息，失败时用于用户可见的错误提示
    pub message: Option<String>,
    /// 业务数据，结构由各接口自行约定
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// 信封是否表示成功
    pub fn is_success(&self) -> bool {
        match self.code {
            None => true,
            Some(code) => code == 200 || code == 201,
        }
    }

    /// 是否为登录态失效
    pub fn is_unauthorized(&self) -> bool {
        self.code == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_codes() {
        assert!(parse(json!({ "code": 200, "data": {} })).is_success());
        assert!(parse(json!({ "code": 201 })).is_success());
        // code 缺失按成功处理
        assert!(parse(json!({ "data": [1, 2, 3] })).is_success());
    }

    #[test]
    fn test_failure_codes() {
        assert!(!parse(json!({ "code": 400, "message": "参数错误" })).is_success());
        assert!(!parse(json!({ "code": 500 })).is_success());

        let unauthorized = parse(json!({ "code": 401, "message": "请先登录" }));
        assert!(!unauthorized.is_success());
        assert!(unauthorized.is_unauthorized());
    }
}
