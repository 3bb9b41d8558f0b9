//! Fallback Component
//!
//! 降级界面组件：构建视图、执行操作。
//! 所有宿主副作用（刷新、重置、导航、剪贴板）都经由 FallbackHostPort；
//! 剪贴板失败在此处兜底，只产生提示，不向外传播。

use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::FallbackHostPort;
use crate::domain::fallback::{
    classify, ErrorCategory, ErrorReport, FallbackAction, FallbackView, Fault,
};

/// 操作执行结果（用于向用户反馈）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 操作已执行，无需额外提示
    Done,
    /// 错误报告已复制到剪贴板
    ReportCopied,
    /// 错误报告复制失败
    ReportCopyFailed,
}

/// Fallback 组件
pub struct FallbackComponent {
    host: Arc<dyn FallbackHostPort>,
}

impl FallbackComponent {
    pub fn new(host: Arc<dyn FallbackHostPort>) -> Self {
        Self { host }
    }

    /// 为捕获到的错误构建降级视图
    pub fn view(&self, fault: &Fault) -> FallbackView {
        FallbackView::for_fault(fault)
    }

    /// 执行用户选择的操作
    pub async fn activate(&self, fault: &Fault, action: FallbackAction) -> ActionOutcome {
        match action {
            FallbackAction::Refresh => {
                // ChunkUpdate 整页刷新，其余类别重置错误边界
                match classify(&fault.message) {
                    ErrorCategory::ChunkUpdate => self.host.reload_page().await,
                    _ => self.host.reset_boundary().await,
                }
                ActionOutcome::Done
            }
            FallbackAction::GoHome => {
                self.host.navigate_home().await;
                ActionOutcome::Done
            }
            FallbackAction::Report => self.copy_report(fault).await,
        }
    }

    async fn copy_report(&self, fault: &Fault) -> ActionOutcome {
        let report = ErrorReport::collect(
            fault,
            self.host.current_url(),
            self.host.user_agent(),
            Utc::now(),
        );

        let json = match report.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize error report");
                return ActionOutcome::ReportCopyFailed;
            }
        };

        match self.host.copy_to_clipboard(&json).await {
            Ok(()) => ActionOutcome::ReportCopied,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to copy error report to clipboard");
                ActionOutcome::ReportCopyFailed
            }
        }
    }
}
