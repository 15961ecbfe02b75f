use async_trait::async_trait;

/// 请求拦截器接口
///
/// 在请求发出前对构建器做最后修改。`path` 为相对于 base_url 的请求
/// 路径，供按端点族调整配置（如超时）使用。拦截器报错时请求不会
/// 发出，错误原样交还调用方。
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// 请求前处理
    async fn before_request(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> anyhow::Result<reqwest::RequestBuilder>;
}

/// 空拦截器实现，用于测试和默认情况
#[derive(Debug, Default)]
pub struct NoOpInterceptor;

#[async_trait]
impl Interceptor for NoOpInterceptor {
    async fn before_request(
        &self,
        request: reqwest::RequestBuilder,
        _path: &str,
    ) -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(request)
    }
}
