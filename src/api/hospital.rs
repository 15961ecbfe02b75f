use serde_json::{Value, json};

use crate::client::HidocClient;
use crate::error::ApiError;
use crate::types::Envelope;

/// 医院维度接口：科室、病历与病人
#[derive(Clone)]
pub struct HospitalApi {
    client: HidocClient,
}

impl HospitalApi {
    pub fn new(client: HidocClient) -> Self {
        Self { client }
    }

    /// 获取当前医生指定医院的科室列表
    ///
    /// `params` 例：`{ "hospital_id": 1 }`
    pub async fn offices(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/hospital/office", Some(params)).await
    }

    /// 查询病历列表
    ///
    /// `params` 例：`{ "office_id": 1, "patient_name": "张三", "page": 1, "per_page": 10 }`
    pub async fn cases(&self, params: Value) -> Result<Envelope, ApiError> {
        self.client.get("/api/hospital/case", Some(params)).await
    }

    /// 添加新病人
    ///
    /// `data` 例：`{ "name": "李四", "gender": "男", "birthday": "2000-01-01" }`
    pub async fn add_patient(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client
            .post("/api/hospital/add_patient", Some(data))
            .await
    }

    /// 添加新病历
    pub async fn add_case(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.post("/api/hospital/case", Some(data)).await
    }

    /// 更新病历，`data` 必须包含 id
    pub async fn update_case(&self, data: Value) -> Result<Envelope, ApiError> {
        self.client.put("/api/hospital/case", Some(data)).await
    }

    /// 获取单条病历
    pub async fn case_by_id(&self, case_id: i64) -> Result<Envelope, ApiError> {
        self.client
            .get("/api/hospital/case/single", Some(json!({ "case_id": case_id })))
            .await
    }

    /// 根据姓名搜索病人
    pub async fn search_patients(&self, name: &str) -> Result<Envelope, ApiError> {
        self.client
            .get("/api/hospital/patient", Some(json!({ "name": name })))
            .await
    }
}
