//! SQLite Tender Repository

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{
    RepositoryError, TenderPage, TenderPageQuery, TenderRecord, TenderRepositoryPort,
    TenderStatsRecord,
};

/// "即将截止" 的时间窗口（天）
const CLOSING_SOON_DAYS: i64 = 7;

const TENDER_COLUMNS: &str = "id, title, organization, category, description, source_url, \
     publish_date, close_date, created_at, updated_at";

/// SQLite Tender Repository
pub struct SqliteTenderRepository {
    pool: DbPool,
}

impl SqliteTenderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// 时间戳统一用固定宽度的 RFC3339 存储，保证 TEXT 列上的比较与排序按时间序成立
fn fmt_ts(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_ts(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

#[derive(FromRow)]
struct TenderRow {
    id: String,
    title: String,
    organization: String,
    category: Option<String>,
    description: Option<String>,
    source_url: Option<String>,
    publish_date: Option<String>,
    close_date: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<TenderRow> for TenderRecord {
    type Error = RepositoryError;

    fn try_from(row: TenderRow) -> Result<Self, Self::Error> {
        Ok(TenderRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            title: row.title,
            organization: row.organization,
            category: row.category,
            description: row.description,
            source_url: row.source_url,
            publish_date: row.publish_date.as_deref().map(parse_ts).transpose()?,
            close_date: row.close_date.as_deref().map(parse_ts).transpose()?,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

#[derive(FromRow)]
struct StatsRow {
    total_tenders: i64,
    open_tenders: i64,
    closing_soon: i64,
    last_updated: Option<String>,
}

impl TryFrom<StatsRow> for TenderStatsRecord {
    type Error = RepositoryError;

    fn try_from(row: StatsRow) -> Result<Self, Self::Error> {
        Ok(TenderStatsRecord {
            total_tenders: row.total_tenders as u64,
            open_tenders: row.open_tenders as u64,
            closing_soon: row.closing_soon as u64,
            last_updated: row.last_updated.as_deref().map(parse_ts).transpose()?,
        })
    }
}

#[async_trait]
impl TenderRepositoryPort for SqliteTenderRepository {
    async fn save(&self, tender: &TenderRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO tenders (id, title, organization, category, description, source_url,
                                 publish_date, close_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                organization = excluded.organization,
                category = excluded.category,
                description = excluded.description,
                source_url = excluded.source_url,
                publish_date = excluded.publish_date,
                close_date = excluded.close_date,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(tender.id.to_string())
        .bind(&tender.title)
        .bind(&tender.organization)
        .bind(&tender.category)
        .bind(&tender.description)
        .bind(&tender.source_url)
        .bind(tender.publish_date.map(fmt_ts))
        .bind(tender.close_date.map(fmt_ts))
        .bind(fmt_ts(tender.created_at))
        .bind(fmt_ts(tender.updated_at))
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn fetch_page(&self, query: &TenderPageQuery) -> Result<TenderPage, RepositoryError> {
        // close_date 为 NULL 的记录不满足 close_date > now，openOnly 下被过滤
        let mut sql = format!("SELECT {} FROM tenders", TENDER_COLUMNS);
        if query.open_only {
            sql.push_str(" WHERE close_date > ?");
        }
        // 升序排序，NULL 排在最后
        sql.push_str(" ORDER BY close_date IS NULL, close_date ASC LIMIT ? OFFSET ?");

        let mut rows_query = sqlx::query_as::<_, TenderRow>(&sql);
        if query.open_only {
            rows_query = rows_query.bind(fmt_ts(query.now));
        }
        let rows: Vec<TenderRow> = rows_query
            .bind(query.limit as i64)
            .bind(query.offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // 总数使用与行查询相同的过滤条件（不加窗口）
        let mut count_sql = String::from("SELECT COUNT(*) FROM tenders");
        if query.open_only {
            count_sql.push_str(" WHERE close_date > ?");
        }
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if query.open_only {
            count_query = count_query.bind(fmt_ts(query.now));
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let rows = rows
            .into_iter()
            .map(TenderRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TenderPage {
            rows,
            total: total as u64,
        })
    }

    async fn fetch_stats(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<TenderStatsRecord>, RepositoryError> {
        let soon = now + Duration::days(CLOSING_SOON_DAYS);

        let row: Option<StatsRow> = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) AS total_tenders,
                COALESCE(SUM(CASE WHEN close_date > ? THEN 1 ELSE 0 END), 0) AS open_tenders,
                COALESCE(SUM(CASE WHEN close_date > ? AND close_date <= ? THEN 1 ELSE 0 END), 0) AS closing_soon,
                MAX(updated_at) AS last_updated
            FROM tenders
            "#,
        )
        .bind(fmt_ts(now))
        .bind(fmt_ts(now))
        .bind(fmt_ts(soon))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(TenderStatsRecord::try_from).transpose()
    }
}
