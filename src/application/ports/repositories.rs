//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Tender Repository
// ============================================================================

/// 招标记录（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderRecord {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub source_url: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    /// 截止时间，可能未知
    pub close_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 分页查询参数
///
/// 不变式: offset = (page-1) * limit
#[derive(Debug, Clone)]
pub struct TenderPageQuery {
    pub offset: u64,
    pub limit: u32,
    /// 只保留 close_date 严格晚于 now 的记录
    pub open_only: bool,
    /// 查询执行时刻，open_only 过滤与统计均以它为基准
    pub now: DateTime<Utc>,
}

/// 分页查询结果：当前页记录 + 过滤后（未加窗口）的总数
#[derive(Debug, Clone)]
pub struct TenderPage {
    pub rows: Vec<TenderRecord>,
    pub total: u64,
}

/// 汇总统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenderStatsRecord {
    pub total_tenders: u64,
    pub open_tenders: u64,
    pub closing_soon: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Tender Repository Port
#[async_trait]
pub trait TenderRepositoryPort: Send + Sync {
    /// 保存招标记录（按 id 覆盖）
    async fn save(&self, tender: &TenderRecord) -> Result<(), RepositoryError>;

    /// 分页获取招标记录
    ///
    /// 按 close_date 升序排序，NULL 排在最后；total 与行查询使用相同的过滤条件
    async fn fetch_page(&self, query: &TenderPageQuery) -> Result<TenderPage, RepositoryError>;

    /// 获取汇总统计
    ///
    /// 无数据行时返回 None，由调用方代入零值默认
    async fn fetch_stats(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<TenderStatsRecord>, RepositoryError>;
}
