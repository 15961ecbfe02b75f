use async_trait::async_trait;

use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use crate::client::HidocClient;
use crate::error::ApiError;
use crate::router::SessionValidator;
use crate::session::UserInfo;
use crate::types::Envelope;

/// 用户与会话生命周期接口
#[derive(Clone)]
pub struct UserApi {
    client: HidocClient,
}

impl UserApi {
    pub fn new(client: HidocClient) -> Self {
        Self { client }
    }

    /// 用户登录
    ///
    /// 成功后把 `data`（含 token）写入本地会话，后续请求自动携带
    /// `Authorization` 头。
    pub async fn login(&self, data: Value) -> Result<Envelope, ApiError> {
        let envelope = self.client.post("/api/login", Some(data)).await?;
        self.store_login(&envelope);
        Ok(envelope)
    }

    /// 把登录响应的 `data` 写入本地会话；非对象 `data` 原样跳过
    fn store_login(&self, envelope: &Envelope) {
        if let Some(info) = envelope.data.as_ref().and_then(UserInfo::from_value) {
            self.client.session().set_user_info(&info);
        }
    }

    /// 用户注册
    pub async fn register(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.post("/api/register", Some(data)).await
    }

    /// 退出登录
    ///
    /// 无论服务端调用结果如何，本地会话都会被清除。
    pub async fn logout(&self) -> Result<Envelope, ApiError> {
        let result = self.client.post("/api/logout", None).await;
        self.client.session().clear_user_info();
        result
    }

    /// 获取用户信息；`user_id` 缺省时返回当前登录用户
    pub async fn user_info(&self, user_id: Option<i64>) -> Result<Envelope, ApiError> {
        let params = user_id.map(|id| json!({ "userId": id }));
        self.client.get("/api/user/info", params).await
    }

    /// 获取医生的医院列表
    pub async fn hospitals(&self) -> Result<Envelope, ApiError> {
        self.client.get("/api/user/hospitals", None).await
    }

    /// 编辑用户信息
    pub async fn update_profile(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.put("/api/user/update", Some(data)).await
    }

    /// 上传用户头像
    ///
    /// 注意该端点在 `/api` 前缀之外。
    pub async fn upload_avatar(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Envelope, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("avatar", part);
        self.client.post_multipart("/user/upload_avatar", form).await
    }

    /// 校验登录状态
    ///
    /// 无本地会话时直接返回 false，不发起网络请求；服务端确认有效时
    /// 用返回的 `data` 覆盖本地会话，否则清除会话并返回 false。任何
    /// 网络失败都按未登录处理。
    pub async fn check_login_status(&self) -> bool {
        let session = self.client.session();
        if !session.is_logged_in() {
            return false;
        }

        match self.user_info(None).await {
            Ok(envelope) => {
                if envelope.code == Some(200) {
                    if let Some(info) = envelope.data.as_ref().and_then(UserInfo::from_value) {
                        session.set_user_info(&info);
                        return true;
                    }
                }
                session.clear_user_info();
                false
            }
            Err(e) => {
                log::debug!("验证登录状态失败: {e}");
                session.clear_user_info();
                false
            }
        }
    }
}

#[async_trait]
impl SessionValidator for UserApi {
    async fn validate(&self) -> bool {
        self.check_login_status().await
    }
}
