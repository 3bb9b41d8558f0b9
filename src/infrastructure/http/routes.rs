//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping      GET   健康检查
//! - /api/tenders   ANY   获取招标列表（OPTIONS 直接返回 200，其余方法统一按读取处理）

use axum::{
    routing::{get, options},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/tenders",
            options(handlers::tenders_preflight).fallback(handlers::list_tenders),
        )
}
