//! Book Queries

use crate::domain::subject::Subject;

/// 按主题查询图书
#[derive(Debug, Clone)]
pub struct GetBooksBySubject {
    pub subject: Subject,
}

impl GetBooksBySubject {
    pub fn new(subject: impl Into<Subject>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}
