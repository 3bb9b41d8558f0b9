//! Data Transfer Objects
//!
//! 对外 JSON 信封。字段命名保持线上协议：顶层 lastUpdated/totalPages 为驼峰，
//! stats 内为蛇形。

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::application::{TenderPageView, TenderRecord, TenderStatsView};

// ============================================================================
// 响应信封
// ============================================================================

/// 招标列表响应信封
#[derive(Debug, Serialize)]
pub struct TenderListResponse {
    pub success: bool,
    pub tenders: Vec<TenderDto>,
    pub pagination: PaginationDto,
    pub stats: TenderStatsDto,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TenderListResponse {
    /// 成功响应
    pub fn success(view: TenderPageView) -> Self {
        Self {
            success: true,
            tenders: view.tenders.into_iter().map(TenderDto::from).collect(),
            pagination: PaginationDto {
                page: view.page,
                limit: view.limit,
                total: view.total,
                total_pages: view.total_pages,
            },
            stats: TenderStatsDto::from(view.stats),
            last_updated: Utc::now().to_rfc3339(),
            error: None,
        }
    }

    /// 错误响应：success=false，分页与统计归零
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            tenders: Vec::new(),
            pagination: PaginationDto::zero(),
            stats: TenderStatsDto::zero(),
            last_updated: Utc::now().to_rfc3339(),
            error: Some(message.into()),
        }
    }
}

/// 分页元数据
#[derive(Debug, Serialize)]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl PaginationDto {
    fn zero() -> Self {
        Self {
            page: 0,
            limit: 0,
            total: 0,
            total_pages: 0,
        }
    }
}

/// 汇总统计
#[derive(Debug, Serialize)]
pub struct TenderStatsDto {
    pub total_tenders: u64,
    pub open_tenders: u64,
    pub closing_soon: u64,
    pub last_updated: Option<String>,
}

impl TenderStatsDto {
    fn zero() -> Self {
        Self {
            total_tenders: 0,
            open_tenders: 0,
            closing_soon: 0,
            last_updated: None,
        }
    }
}

impl From<TenderStatsView> for TenderStatsDto {
    fn from(view: TenderStatsView) -> Self {
        Self {
            total_tenders: view.total_tenders,
            open_tenders: view.open_tenders,
            closing_soon: view.closing_soon,
            last_updated: view.last_updated,
        }
    }
}

// ============================================================================
// Tender DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TenderDto {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub source_url: Option<String>,
    pub publish_date: Option<String>,
    pub close_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TenderRecord> for TenderDto {
    fn from(record: TenderRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            organization: record.organization,
            category: record.category,
            description: record.description,
            source_url: record.source_url,
            publish_date: record.publish_date.map(|dt| dt.to_rfc3339()),
            close_date: record.close_date.map(|dt| dt.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}
