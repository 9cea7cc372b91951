//! Application State

use std::sync::Arc;

use crate::application::{BookSearchPort, GetBooksBySubjectHandler, GetRandomSubjectHandler};

/// 应用状态
///
/// 请求之间除只读主题列表外没有共享可变状态
pub struct AppState {
    pub random_subject_handler: GetRandomSubjectHandler,
    pub books_by_subject_handler: GetBooksBySubjectHandler,
}

impl AppState {
    pub fn new(book_search: Arc<dyn BookSearchPort>) -> Self {
        Self {
            random_subject_handler: GetRandomSubjectHandler::new(),
            books_by_subject_handler: GetBooksBySubjectHandler::new(book_search),
        }
    }
}
