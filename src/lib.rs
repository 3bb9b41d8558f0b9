//! Tenderd - 招标信息查询服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Fallback Context: 错误分类与降级展示
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TenderRepository、FallbackHost）
//! - Queries: 查询处理器
//! - Fallback: 降级界面组件
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
