use reqwest::multipart::Form;
use serde_json::Value;

use crate::client::HidocClient;
use crate::error::ApiError;
use crate::types::Envelope;

/// 影像与标注接口
///
/// 影像族端点命中拦截器的 `/image/` 标记，超时自动放宽到 10 分钟。
#[derive(Clone)]
pub struct ImageApi {
    client: HidocClient,
}

impl ImageApi {
    pub fn new(client: HidocClient) -> Self {
        Self { client }
    }

    /// 获取当前医生创建的所有影像列表
    pub async fn list(&self) -> Result<Envelope, ApiError> {
        self.client.get("/api/image/list", None).await
    }

    /// 上传新影像（multipart/form-data）
    pub async fn add(&self, form: Form) -> Result<Envelope, ApiError> {
        self.client.post_multipart("/api/image/add", form).await
    }

    /// 删除影像
    pub async fn delete(&self, image_id: i64) -> Result<Envelope, ApiError> {
        self.client
            .delete(&format!("/api/image/{image_id}"), None)
            .await
    }

    /// 编辑影像备注
    pub async fn update(&self, image_id: i64, data: Value) -> Result<Envelope, ApiError> {
        self.client
            .put(&format!("/api/image/{image_id}"), Some(data))
            .await
    }

    /// 获取单个影像的预览信息
    pub async fn preview(
        &self,
        image_id: i64,
        params: Option<Value>,
    ) -> Result<Envelope, ApiError> {
        self.client
            .get(&format!("/api/image/{image_id}"), params)
            .await
    }

    /// 新建标注
    pub async fn add_annotation(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.post("/api/image/annotate", Some(data)).await
    }

    /// 查询标注
    pub async fn annotations(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/image/annotate", Some(params)).await
    }

    /// 更新标注
    pub async fn update_annotation(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.put("/api/image/annotate", Some(data)).await
    }

    /// 删除标注（参数放在请求体）
    pub async fn delete_annotation(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.delete("/api/image/annotate", Some(data)).await
    }

    /// 提交 AI 分割任务
    pub async fn add_seg(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.post("/api/image/seg", Some(data)).await
    }

    /// 查询 AI 分割结果列表
    pub async fn seg_list(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/image/seg/list", Some(params)).await
    }
}
