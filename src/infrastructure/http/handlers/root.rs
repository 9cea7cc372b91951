//! Root Handler

use axum::Json;

use crate::infrastructure::http::dto::MessageResponse;

/// 根路径 - 存活消息
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Judge a Book API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
