//! Error Classifier
//!
//! 基于错误消息文本的子串匹配进行分类，首个命中的规则生效。
//! 匹配区分大小写。

/// 捕获到的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// 错误消息文本
    pub message: String,
    /// 调用栈（如果有）
    pub stack: Option<String>,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: Some(stack.into()),
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 资源分块加载失败，通常意味着应用已发布新版本
    ChunkUpdate,
    /// 网络请求失败
    NetworkProblem,
    /// 其他未知错误
    GenericFailure,
}

/// 对错误消息进行分类
///
/// 规则（先命中先生效）：
/// 1. 包含 "Loading chunk" 或 "ChunkLoadError" → ChunkUpdate
/// 2. 包含 "fetch" 或 "network" → NetworkProblem
/// 3. 其余 → GenericFailure
pub fn classify(message: &str) -> ErrorCategory {
    if message.contains("Loading chunk") || message.contains("ChunkLoadError") {
        ErrorCategory::ChunkUpdate
    } else if message.contains("fetch") || message.contains("network") {
        ErrorCategory::NetworkProblem
    } else {
        ErrorCategory::GenericFailure
    }
}
