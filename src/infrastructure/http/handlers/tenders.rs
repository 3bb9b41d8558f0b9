//! Tender HTTP Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::ListTenders;
use crate::infrastructure::http::dto::TenderListResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 原始查询参数，全部按字符串接收后宽松解析
#[derive(Debug, Default, Deserialize)]
pub struct ListTendersParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "openOnly")]
    pub open_only: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取招标列表
///
/// 除 OPTIONS 外的所有 HTTP 方法统一按读取处理
pub async fn list_tenders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTendersParams>,
) -> Result<Json<TenderListResponse>, ApiError> {
    let query = ListTenders::from_raw(
        params.page.as_deref(),
        params.limit.as_deref(),
        params.open_only.as_deref(),
    );

    tracing::debug!(
        page = query.page,
        limit = query.limit,
        open_only = query.open_only,
        "Listing tenders"
    );

    let view = state.list_tenders_handler.handle(query).await?;

    Ok(Json(TenderListResponse::success(view)))
}

/// OPTIONS 预检：立即返回 200，不做任何请求处理
pub async fn tenders_preflight() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use chrono::{DateTime, Duration, Utc};
    use tower::util::ServiceExt;
    use uuid::Uuid;

    use crate::application::ports::{
        RepositoryError, TenderPage, TenderPageQuery, TenderRecord, TenderRepositoryPort,
        TenderStatsRecord,
    };
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteTenderRepository,
    };

    /// 所有查询都失败的仓储，用于模拟数据库故障
    struct FailingRepo;

    #[async_trait]
    impl TenderRepositoryPort for FailingRepo {
        async fn save(&self, _tender: &TenderRecord) -> Result<(), RepositoryError> {
            Err(RepositoryError::DatabaseError("connection refused".into()))
        }

        async fn fetch_page(
            &self,
            _query: &TenderPageQuery,
        ) -> Result<TenderPage, RepositoryError> {
            Err(RepositoryError::DatabaseError("connection refused".into()))
        }

        async fn fetch_stats(
            &self,
            _now: DateTime<Utc>,
        ) -> Result<Option<TenderStatsRecord>, RepositoryError> {
            Err(RepositoryError::DatabaseError("connection refused".into()))
        }
    }

    fn app(repo: Arc<dyn TenderRepositoryPort>) -> axum::Router {
        create_routes().with_state(Arc::new(AppState::new(repo)))
    }

    async fn seeded_app(count: i64) -> axum::Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = SqliteTenderRepository::new(pool);

        let now = Utc::now();
        for i in 0..count {
            repo.save(&TenderRecord {
                id: Uuid::new_v4(),
                title: format!("T{:02}", i),
                organization: "Test Org".to_string(),
                category: None,
                description: None,
                source_url: None,
                publish_date: None,
                close_date: Some(now + Duration::days(i + 1)),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        }

        app(Arc::new(repo))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_pagination_example() {
        let app = seeded_app(25).await;
        let request = Request::builder()
            .uri("/api/tenders?page=2&limit=10")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["pagination"]["limit"], 10);
        assert_eq!(json["pagination"]["total"], 25);
        assert_eq!(json["pagination"]["totalPages"], 3);
        // 窗口为第 11..=20 条
        let tenders = json["tenders"].as_array().unwrap();
        assert_eq!(tenders.len(), 10);
        assert_eq!(tenders.first().unwrap()["title"], "T10");
        assert_eq!(tenders.last().unwrap()["title"], "T19");
        assert!(json["lastUpdated"].is_string());
        assert_eq!(json["stats"]["total_tenders"], 25);
    }

    #[tokio::test]
    async fn test_defaults_for_missing_and_invalid_params() {
        let app = seeded_app(3).await;
        let request = Request::builder()
            .uri("/api/tenders?page=abc&limit=-1&openOnly=yes")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["pagination"]["page"], 1);
        assert_eq!(json["pagination"]["limit"], 1000);
        assert_eq!(json["pagination"]["total"], 3);
        assert_eq!(json["pagination"]["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_open_only_filters_rows() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = SqliteTenderRepository::new(pool);

        let now = Utc::now();
        for (title, close_date) in [
            ("past", Some(now - Duration::days(1))),
            ("future", Some(now + Duration::days(1))),
            ("unknown", None),
        ] {
            repo.save(&TenderRecord {
                id: Uuid::new_v4(),
                title: title.to_string(),
                organization: "Test Org".to_string(),
                category: None,
                description: None,
                source_url: None,
                publish_date: None,
                close_date,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        }

        let app = app(Arc::new(repo));
        let request = Request::builder()
            .uri("/api/tenders?openOnly=true")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let json = body_json(response).await;

        let tenders = json["tenders"].as_array().unwrap();
        assert_eq!(tenders.len(), 1);
        assert_eq!(tenders[0]["title"], "future");
        assert_eq!(json["pagination"]["total"], 1);
    }

    #[tokio::test]
    async fn test_post_is_treated_as_read() {
        let app = seeded_app(2).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/tenders")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["pagination"]["total"], 2);
    }

    #[tokio::test]
    async fn test_database_failure_returns_500_envelope() {
        let app = app(Arc::new(FailingRepo));
        let request = Request::builder()
            .uri("/api/tenders")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["tenders"].as_array().unwrap().len(), 0);
        assert_eq!(json["pagination"]["page"], 0);
        assert_eq!(json["pagination"]["totalPages"], 0);
        assert_eq!(json["stats"]["total_tenders"], 0);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn test_options_short_circuits_without_touching_db() {
        // 即使仓储不可用，OPTIONS 也应立即返回 200
        let app = app(Arc::new(FailingRepo));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/tenders")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
