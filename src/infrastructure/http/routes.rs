//! HTTP Routes
//!
//! API Endpoints:
//! - /                          GET   存活消息
//! - /api/subjects/random       GET   随机主题
//! - /api/books/:subject        GET   按主题查询图书

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/subjects/random", get(handlers::get_random_subject))
        .route("/books/:subject", get(handlers::get_books_by_subject))
}
