//! Fallback Context - 错误分类与降级展示
//!
//! 将捕获到的错误按消息文本分类，并为每个类别给出展示配置与可用操作。
//! 分类永不失败，未匹配的错误落入 GenericFailure。

mod classifier;
mod presentation;
mod report;

pub use classifier::{classify, ErrorCategory, Fault};
pub use presentation::{ColorScheme, FallbackAction, FallbackConfig, FallbackView, IconKind};
pub use report::ErrorReport;
