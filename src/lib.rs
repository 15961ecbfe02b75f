//! # hidoc-client
//!
//! 医院病例/影像管理平台（HiDoc）的 Rust 客户端 SDK。
//!
//! 三个协作层次：
//!
//! - **共享 HTTP 客户端**（[`HidocClient`]）：统一的 base_url、默认超时与
//!   Cookie 凭证配置，所有 API 模块复用同一个实例；
//! - **拦截器层**（[`interceptor`]）：请求前按端点族覆盖超时并附加
//!   Authorization 头，响应后统一解包 `{code, message, data}` 信封；
//! - **路由与守卫**（[`router`]）：页面路由表与导航前的异步登录校验。
//!
//! 会话不再依赖全局存储，而是通过显式的 [`SessionStore`] 在客户端、
//! 拦截器与守卫之间共享。
//!
//! ## 快速开始
//!
//! ```no_run
//! use hidoc_client::api::UserApi;
//! use hidoc_client::{ClientConfig, HidocClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hidoc_client::ApiError> {
//!     let client = HidocClient::builder(ClientConfig::from_env()).build()?;
//!     let user = UserApi::new(client.clone());
//!
//!     // 登录成功后 token 自动写入会话，后续请求自动携带
//!     user.login(json!({ "username": "doctor", "password": "secret" }))
//!         .await?;
//!     let envelope = user.hospitals().await?;
//!     println!("{:?}", envelope.data);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod notify;
pub mod router;
pub mod session;
pub mod types;

pub use client::{HidocClient, HidocClientBuilder};
pub use config::{ClientConfig, Environment};
pub use error::ApiError;
pub use notify::{LogNotifier, Notifier};
pub use session::{SessionStore, UserInfo};
pub use types::{Body, Envelope};
