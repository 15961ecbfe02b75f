/// 用户可见的消息提示接口
///
/// SDK 本身不渲染 UI；宿主（桌面壳、TUI 或测试）实现该接口后即可
/// 接收请求失败与登录提示等瞬时消息。
pub trait Notifier: Send + Sync {
    /// 错误提示
    fn error(&self, message: &str);
    /// 警告提示
    fn warning(&self, message: &str);
}

/// 默认实现：写入日志
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!("{message}");
    }
}
