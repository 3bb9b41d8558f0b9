//! Fallback Presentation
//!
//! 每个错误类别对应一份固定的展示配置（标题、说明、图标、主操作）。
//! 类别到配置的映射只在构建视图时解析一次。

use super::classifier::{classify, ErrorCategory, Fault};

/// 图标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Refresh,
    Warning,
    Bug,
}

/// 配色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Blue,
    Orange,
    Red,
}

/// 降级界面展示配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackConfig {
    /// 标题
    pub title: &'static str,
    /// 说明文案
    pub message: &'static str,
    /// 图标
    pub icon: IconKind,
    /// 主操作按钮文案
    pub primary_action_label: &'static str,
    /// 是否展示技术细节（错误消息与调用栈）
    pub show_technical_details: bool,
    /// 配色
    pub color_scheme: ColorScheme,
}

impl ErrorCategory {
    /// 类别对应的展示配置
    pub fn presentation(self) -> FallbackConfig {
        match self {
            ErrorCategory::ChunkUpdate => FallbackConfig {
                title: "App Update Available",
                message: "A new version of the app is available. Refresh the page to load the latest update.",
                icon: IconKind::Refresh,
                primary_action_label: "Refresh Page",
                show_technical_details: false,
                color_scheme: ColorScheme::Blue,
            },
            ErrorCategory::NetworkProblem => FallbackConfig {
                title: "Connection Problem",
                message: "Unable to reach the server. Check your internet connection and try again.",
                icon: IconKind::Warning,
                primary_action_label: "Try Again",
                show_technical_details: false,
                color_scheme: ColorScheme::Orange,
            },
            ErrorCategory::GenericFailure => FallbackConfig {
                title: "Something Went Wrong",
                message: "An unexpected error occurred. You can retry, or report the problem to help us fix it.",
                icon: IconKind::Bug,
                primary_action_label: "Try Again",
                show_technical_details: true,
                color_scheme: ColorScheme::Red,
            },
        }
    }
}

/// 降级界面可用操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAction {
    /// 主操作：ChunkUpdate 整页刷新，其余类别重置错误边界
    Refresh,
    /// 完整导航回根路径
    GoHome,
    /// 复制错误报告到剪贴板（仅在展示技术细节时可用）
    Report,
}

/// 降级界面视图：分类结果 + 展示配置 + 可用操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub category: ErrorCategory,
    pub config: FallbackConfig,
    pub actions: Vec<FallbackAction>,
}

impl FallbackView {
    /// 从捕获到的错误构建视图
    pub fn for_fault(fault: &Fault) -> Self {
        let category = classify(&fault.message);
        let config = category.presentation();

        let mut actions = vec![FallbackAction::Refresh, FallbackAction::GoHome];
        if config.show_technical_details {
            actions.push(FallbackAction::Report);
        }

        Self {
            category,
            config,
            actions,
        }
    }
}
