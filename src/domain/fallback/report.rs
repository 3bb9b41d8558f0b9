//! Error Report
//!
//! 错误报告记录：错误消息、调用栈、页面 URL、客户端 UA 和 ISO-8601 时间戳。
//! 序列化为 JSON 后交由宿主放入剪贴板。

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classifier::Fault;

/// 错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误消息
    pub message: String,
    /// 调用栈（如果有）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// 发生错误时的页面 URL
    pub url: String,
    /// 客户端 User-Agent
    pub user_agent: String,
    /// ISO-8601 时间戳
    pub timestamp: String,
}

impl ErrorReport {
    /// 从错误与宿主环境信息收集报告
    pub fn collect(
        fault: &Fault,
        url: impl Into<String>,
        user_agent: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            message: fault.message.clone(),
            stack: fault.stack.clone(),
            url: url.into(),
            user_agent: user_agent.into(),
            timestamp: at.to_rfc3339(),
        }
    }

    /// 序列化为 JSON 文本
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
