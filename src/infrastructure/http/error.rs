//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::ApplicationError;

/// 上游失败时返回给客户端的信息（不暴露具体上游错误）
pub const UPSTREAM_FAILURE_DETAIL: &str = "Failed to fetch data from Open Library";

/// API 错误
///
/// 携带的字符串只用于日志
#[derive(Debug)]
pub enum ApiError {
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::BadGateway(cause) => {
                tracing::error!(status = 502, error = %cause, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE_DETAIL)
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::UpstreamUnavailable(cause) => ApiError::BadGateway(cause),
        }
    }
}
