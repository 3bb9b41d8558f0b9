//! Fallback Host Port - 出站端口
//!
//! 降级界面的宿主环境接口：页面刷新、错误边界重置、导航与剪贴板。
//! 具体实现由承载降级界面的宿主提供（浏览器壳、桌面壳等）。

use async_trait::async_trait;
use thiserror::Error;

/// 宿主操作错误
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(String),
}

/// Fallback Host Port
#[async_trait]
pub trait FallbackHostPort: Send + Sync {
    /// 当前页面 URL
    fn current_url(&self) -> String;

    /// 客户端 User-Agent
    fn user_agent(&self) -> String;

    /// 整页刷新（丢弃内存状态）
    async fn reload_page(&self);

    /// 重置错误边界（不刷新页面，尝试重新渲染失败的子树）
    async fn reset_boundary(&self);

    /// 完整导航回根路径（不走客户端路由）
    async fn navigate_home(&self);

    /// 将文本写入系统剪贴板
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError>;
}
