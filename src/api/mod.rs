//! HTTP 接口封装
//!
//! 每个模块对应后端的一个接口族，与 REST 端点一一映射，不做任何
//! 数据转换或业务逻辑；参数与返回值均为信封约定的 JSON。

pub mod home;
pub mod hospital;
pub mod image;
pub mod patient;
pub mod user;

pub use home::HomeApi;
pub use hospital::HospitalApi;
pub use image::ImageApi;
pub use patient::PatientApi;
pub use user::UserApi;
