//! HTTP Error Handling
//!
//! 处理链路上的任何错误都在这里收口：统一转成 HTTP 500 + 失败信封，
//! 绝不让异常穿透到传输层。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::TenderListResponse;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Internal(msg) = self;
        tracing::error!(error = %msg, "Internal server error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TenderListResponse::failure(msg)),
        )
            .into_response()
    }
}

impl From<crate::application::ApplicationError> for ApiError {
    fn from(e: crate::application::ApplicationError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
