//! Data Transfer Objects

use serde::Serialize;

use crate::domain::book::{Book, BookList};
use crate::domain::subject::Subject;

/// 根路径存活消息，附带服务版本
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// 错误响应（`detail` 字段为可读信息）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// ============================================================================
// Subject DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub subject: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            subject: subject.into_inner(),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub open_library_key: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            cover_url: book.cover_url,
            open_library_key: book.open_library_key,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub subject: String,
    pub books: Vec<BookResponse>,
}

impl From<BookList> for BookListResponse {
    fn from(list: BookList) -> Self {
        Self {
            subject: list.subject.into_inner(),
            books: list.books.into_iter().map(BookResponse::from).collect(),
        }
    }
}
