use reqwest::multipart::Form;
use serde_json::Value;

/// 请求体
///
/// 绝大多数接口使用 JSON，影像与头像上传使用 multipart/form-data。
pub enum Body {
    Json(Value),
    Multipart(Form),
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<Form> for Body {
    fn from(form: Form) -> Self {
        Body::Multipart(form)
    }
}
