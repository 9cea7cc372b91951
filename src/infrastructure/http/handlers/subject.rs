//! Subject HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetRandomSubject;
use crate::infrastructure::http::dto::SubjectResponse;
use crate::infrastructure::http::state::AppState;

/// 随机返回一个预定义主题
pub async fn get_random_subject(State(state): State<Arc<AppState>>) -> Json<SubjectResponse> {
    let subject = state.random_subject_handler.handle(GetRandomSubject);
    Json(SubjectResponse::from(subject))
}
