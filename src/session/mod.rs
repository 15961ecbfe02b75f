pub mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 会话 blob 的存储键
pub const USER_INFO_KEY: &str = "userInfo";
/// “当前选中医院” blob 的存储键
pub const CURRENT_HOSPITAL_KEY: &str = "currentHospital";

/// 本地会话中保存的用户信息
///
/// 除 `token` 外的字段由后端决定，原样透传保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// 认证令牌，登录接口下发
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// 其余个人资料字段
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl UserInfo {
    /// 从接口返回的 `data` 字段构造；非对象值返回 None
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// 显式会话存储
///
/// 登录态与“当前选中医院”两个 JSON blob 的唯一读写入口，客户端、
/// 请求拦截器与路由守卫共享同一实例。克隆仅复制 Arc 引用。
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 进程内会话存储，测试与短生命周期工具使用
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// 是否存在本地会话（只看 blob 是否存在，不校验内容）
    pub fn is_logged_in(&self) -> bool {
        self.storage.get(USER_INFO_KEY).is_some()
    }

    /// 读取用户信息
    ///
    /// blob 损坏时记录日志、删除 blob 并返回 None，不向调用方抛错。
    pub fn user_info(&self) -> Option<UserInfo> {
        let raw = self.storage.get(USER_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                log::error!("解析用户信息失败: {e}");
                self.storage.remove(USER_INFO_KEY);
                None
            }
        }
    }

    /// 写入用户信息，覆盖原有会话
    pub fn set_user_info(&self, info: &UserInfo) {
        match serde_json::to_string(info) {
            Ok(raw) => self.storage.set(USER_INFO_KEY, &raw),
            Err(e) => log::error!("序列化用户信息失败: {e}"),
        }
    }

    /// 清除本地会话
    pub fn clear_user_info(&self) {
        self.storage.remove(USER_INFO_KEY);
    }

    /// 当前会话的认证令牌；无会话、blob 损坏或缺少 token 时为 None
    pub fn token(&self) -> Option<String> {
        self.user_info().and_then(|info| info.token)
    }

    /// 读取当前选中的医院；blob 损坏时删除并返回 None
    pub fn current_hospital(&self) -> Option<Value> {
        let raw = self.storage.get(CURRENT_HOSPITAL_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("解析医院信息失败: {e}");
                self.storage.remove(CURRENT_HOSPITAL_KEY);
                None
            }
        }
    }

    /// 写入当前选中的医院
    pub fn set_current_hospital(&self, hospital: &Value) {
        match serde_json::to_string(hospital) {
            Ok(raw) => self.storage.set(CURRENT_HOSPITAL_KEY, &raw),
            Err(e) => log::error!("序列化医院信息失败: {e}"),
        }
    }

    /// 清除当前选中的医院
    pub fn clear_current_hospital(&self) {
        self.storage.remove(CURRENT_HOSPITAL_KEY);
    }
}
