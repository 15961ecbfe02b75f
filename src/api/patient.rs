use serde_json::{Value, json};

use crate::client::HidocClient;
use crate::error::ApiError;
use crate::types::Envelope;

/// 病人维度接口
#[derive(Clone)]
pub struct PatientApi {
    client: HidocClient,
}

impl PatientApi {
    pub fn new(client: HidocClient) -> Self {
        Self { client }
    }

    /// 获取当前医生负责的病人列表
    ///
    /// `params` 例：`{ "page": 1, "per_page": 10 }`
    pub async fn list(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/patient/list", Some(params)).await
    }

    /// 获取指定病人的病历列表
    pub async fn cases(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/patient/case", Some(params)).await
    }

    /// 获取指定病人的 AI 辅诊记录列表
    pub async fn analyses(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/patient/analyze", Some(params)).await
    }

    /// 对指定病人发起新的 AI 分析
    pub async fn start_analysis(&self, patient_id: i64) -> Result<Envelope, ApiError> {
        self.client
            .post("/api/patient/analyze", Some(json!({ "patient_id": patient_id })))
            .await
    }

    /// 获取指定病人的详细信息
    pub async fn detail(&self, patient_id: i64) -> Result<Envelope, ApiError> {
        self.client
            .get("/api/patient/detail", Some(json!({ "patient_id": patient_id })))
            .await
    }
}
