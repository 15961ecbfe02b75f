use serde_json::json;

use crate::client::HidocClient;
use crate::error::ApiError;
use crate::types::Envelope;

/// 首页接口
#[derive(Clone)]
pub struct HomeApi {
    client: HidocClient,
}

impl HomeApi {
    pub fn new(client: HidocClient) -> Self {
        Self { client }
    }

    /// 获取指定医院的首页看板数据
    pub async fn home_data(&self, hospital_id: i64) -> Result<Envelope, ApiError> {
        self.client
            .get("/api/home/data", Some(json!({ "hospital_id": hospital_id })))
            .await
    }
}
