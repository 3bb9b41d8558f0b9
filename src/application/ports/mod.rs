//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod fallback_host;
mod repositories;

pub use fallback_host::{FallbackHostPort, HostError};
pub use repositories::{
    RepositoryError, TenderPage, TenderPageQuery, TenderRecord, TenderRepositoryPort,
    TenderStatsRecord,
};
