//! Tender Query Handlers

use std::sync::Arc;

use chrono::Utc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    TenderPageQuery, TenderRecord, TenderRepositoryPort, TenderStatsRecord,
};
use crate::application::queries::ListTenders;

// ============================================================================
// Response DTOs
// ============================================================================

/// 汇总统计响应
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenderStatsView {
    pub total_tenders: u64,
    pub open_tenders: u64,
    pub closing_soon: u64,
    pub last_updated: Option<String>,
}

impl From<TenderStatsRecord> for TenderStatsView {
    fn from(record: TenderStatsRecord) -> Self {
        Self {
            total_tenders: record.total_tenders,
            open_tenders: record.open_tenders,
            closing_soon: record.closing_soon,
            last_updated: record.last_updated.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// 分页列表响应
#[derive(Debug, Clone)]
pub struct TenderPageView {
    pub tenders: Vec<TenderRecord>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub stats: TenderStatsView,
}

/// totalPages = ceil(total / limit)，total 为 0 时结果为 0
fn total_pages(total: u64, limit: u32) -> u64 {
    (total + limit as u64 - 1) / limit as u64
}

// ============================================================================
// Handlers
// ============================================================================

/// ListTenders Handler
///
/// 顺序执行两次仓储调用：行查询（含总数），然后统计查询
pub struct ListTendersHandler {
    tender_repo: Arc<dyn TenderRepositoryPort>,
}

impl ListTendersHandler {
    pub fn new(tender_repo: Arc<dyn TenderRepositoryPort>) -> Self {
        Self { tender_repo }
    }

    pub async fn handle(&self, query: ListTenders) -> Result<TenderPageView, ApplicationError> {
        let now = Utc::now();

        let page = self
            .tender_repo
            .fetch_page(&TenderPageQuery {
                offset: query.offset(),
                limit: query.limit,
                open_only: query.open_only,
                now,
            })
            .await?;

        // 统计查询无结果时代入零值默认
        let stats = self
            .tender_repo
            .fetch_stats(now)
            .await?
            .unwrap_or_default();

        Ok(TenderPageView {
            total_pages: total_pages(page.total, query.limit),
            tenders: page.rows,
            page: query.page,
            limit: query.limit,
            total: page.total,
            stats: TenderStatsView::from(stats),
        })
    }
}
