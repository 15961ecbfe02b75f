pub mod auth;
pub mod traits;

pub use auth::{AI_TIMEOUT, AuthInterceptor, IMAGE_TIMEOUT};
pub use traits::{Interceptor, NoOpInterceptor};
