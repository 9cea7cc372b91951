//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookSearchPort, SearchQuery};
use crate::application::queries::GetBooksBySubject;
use crate::domain::book::{normalize_records, BookList};

/// GetBooksBySubject Handler
///
/// 一次上游调用，失败即返回错误，不重试也不返回部分结果。
pub struct GetBooksBySubjectHandler {
    search: Arc<dyn BookSearchPort>,
}

impl GetBooksBySubjectHandler {
    pub fn new(search: Arc<dyn BookSearchPort>) -> Self {
        Self { search }
    }

    pub async fn handle(&self, query: GetBooksBySubject) -> Result<BookList, ApplicationError> {
        let search_query = SearchQuery::for_subject(&query.subject);

        let result = self.search.search(&search_query).await.map_err(|e| {
            tracing::error!(subject = %query.subject, error = %e, "Book search failed");
            ApplicationError::from(e)
        })?;

        let received = result.docs.len();
        let books = normalize_records(result.docs);

        tracing::info!(
            subject = %query.subject,
            received,
            kept = books.len(),
            dropped = received - books.len(),
            "Book lookup completed"
        );

        Ok(BookList::new(query.subject, books))
    }
}
