//! Fake Book Search Client - 用于测试的搜索客户端
//!
//! 不访问网络，返回预设的记录或错误，并记录收到的请求

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{BookSearchPort, SearchError, SearchQuery, SearchResult};
use crate::domain::book::RawBookRecord;

/// Fake Book Search Client
pub struct FakeBookSearchClient {
    outcome: Result<Vec<RawBookRecord>, SearchError>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl FakeBookSearchClient {
    /// 每次搜索都返回给定的记录
    pub fn with_docs(docs: Vec<RawBookRecord>) -> Self {
        Self {
            outcome: Ok(docs),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// 每次搜索都返回给定的错误
    pub fn failing(error: SearchError) -> Self {
        Self {
            outcome: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的搜索请求
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl BookSearchPort for FakeBookSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        tracing::debug!(q = %query.q, "FakeBookSearchClient: returning canned outcome");

        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.clone());

        self.outcome
            .clone()
            .map(|docs| SearchResult { docs })
    }
}
