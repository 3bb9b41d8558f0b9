//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TenderRepository、FallbackHost）
//! - queries: 查询及处理器
//! - fallback: 降级界面组件
//! - error: 应用层错误定义

pub mod error;
pub mod fallback;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use fallback::{ActionOutcome, FallbackComponent};

pub use ports::{
    FallbackHostPort, HostError, RepositoryError, TenderPage, TenderPageQuery, TenderRecord,
    TenderRepositoryPort, TenderStatsRecord,
};

pub use queries::{
    handlers::{ListTendersHandler, TenderPageView, TenderStatsView},
    ListTenders,
};
