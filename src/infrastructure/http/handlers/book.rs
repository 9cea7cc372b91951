//! Book HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::GetBooksBySubject;
use crate::infrastructure::http::dto::BookListResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 按主题查询图书
///
/// 主题不做校验，原样作为搜索词转发
pub async fn get_books_by_subject(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Result<Json<BookListResponse>, ApiError> {
    let list = state
        .books_by_subject_handler
        .handle(GetBooksBySubject::new(subject))
        .await?;

    Ok(Json(BookListResponse::from(list)))
}
