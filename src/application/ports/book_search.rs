//! Book Search Port - 外部图书搜索服务抽象
//!
//! 定义图书搜索的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::RawBookRecord;
use crate::domain::subject::Subject;

/// 单次搜索返回的最大结果数
pub const SEARCH_LIMIT: u32 = 15;

/// 请求上游只返回这些字段（上游可以忽略此提示）
pub const SEARCH_FIELDS: &[&str] = &["title", "author_name", "cover_i", "key"];

/// 搜索错误
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// 搜索请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// 自由文本搜索词
    pub q: String,
    /// 结果数量上限
    pub limit: u32,
    /// 字段选择提示
    pub fields: &'static [&'static str],
}

impl SearchQuery {
    /// 根据主题构造搜索请求
    pub fn for_subject(subject: &Subject) -> Self {
        Self {
            q: subject.as_str().to_string(),
            limit: SEARCH_LIMIT,
            fields: SEARCH_FIELDS,
        }
    }

    /// 逗号分隔的字段列表，用作 `fields` 查询参数
    pub fn fields_param(&self) -> String {
        self.fields.join(",")
    }
}

/// 搜索结果
///
/// 上游响应缺少记录列表时为空列表。
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub docs: Vec<RawBookRecord>,
}

/// Book Search Port
#[async_trait]
pub trait BookSearchPort: Send + Sync {
    /// 执行一次搜索，不重试
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_for_subject() {
        let query = SearchQuery::for_subject(&Subject::from("time_travel"));
        assert_eq!(query.q, "time_travel");
        assert_eq!(query.limit, 15);
        assert_eq!(query.fields_param(), "title,author_name,cover_i,key");
    }

    #[test]
    fn test_query_keeps_free_text_verbatim() {
        let query = SearchQuery::for_subject(&Subject::from("the lord of the rings"));
        assert_eq!(query.q, "the lord of the rings");
    }
}
