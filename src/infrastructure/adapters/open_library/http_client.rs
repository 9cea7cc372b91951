//! Open Library HTTP Client - 调用 Open Library 搜索 API
//!
//! 实现 BookSearchPort trait
//!
//! 外部 API:
//! GET https://openlibrary.org/search.json?q=...&limit=15&fields=title,author_name,cover_i,key
//! Response: {"docs": [{...}, ...], ...}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{BookSearchPort, SearchError, SearchQuery, SearchResult};
use crate::domain::book::RawBookRecord;

/// Open Library 客户端配置
#[derive(Debug, Clone)]
pub struct OpenLibraryClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent 请求头
    pub user_agent: String,
}

impl Default for OpenLibraryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            timeout_secs: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl OpenLibraryClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Open Library 搜索客户端
///
/// 每次搜索只发起一次请求，不重试，不缓存
pub struct OpenLibraryClient {
    client: Client,
    config: OpenLibraryClientConfig,
}

impl OpenLibraryClient {
    /// 创建新的客户端
    pub fn new(config: OpenLibraryClientConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取搜索 URL
    fn search_url(&self) -> String {
        format!("{}/search.json", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl BookSearchPort for OpenLibraryClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let params = [
            ("q", query.q.clone()),
            ("limit", query.limit.to_string()),
            ("fields", query.fields_param()),
        ];

        tracing::debug!(
            url = %self.search_url(),
            q = %query.q,
            limit = query.limit,
            "Sending Open Library search request"
        );

        let response = self
            .client
            .get(self.search_url())
            .query(&params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, q = %query.q, "Open Library returned non-success status");
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let result = parse_search_body(&body)?;

        tracing::debug!(
            q = %query.q,
            docs = result.docs.len(),
            body_size = body.len(),
            "Open Library search completed"
        );

        Ok(result)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else if e.is_connect() {
        SearchError::Network(format!("Cannot connect to Open Library: {}", e))
    } else {
        SearchError::Network(e.to_string())
    }
}

/// 解析搜索响应体
///
/// - 响应体不是 JSON 对象：`InvalidPayload`
/// - 缺少 `docs` 或 `docs` 不是数组：空结果
/// - 单条记录不是对象：跳过
pub fn parse_search_body(body: &[u8]) -> Result<SearchResult, SearchError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| SearchError::InvalidPayload(e.to_string()))?;

    let Value::Object(mut object) = value else {
        return Err(SearchError::InvalidPayload(
            "response body is not a JSON object".to_string(),
        ));
    };

    let docs = match object.remove("docs") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| RawBookRecord::deserialize(item).ok())
            .collect(),
        Some(other) => {
            tracing::warn!(kind = %json_kind(&other), "Ignoring non-array docs field");
            Vec::new()
        }
        None => Vec::new(),
    };

    Ok(SearchResult { docs })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subject::Subject;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenLibraryClient {
        OpenLibraryClient::new(OpenLibraryClientConfig::new(server.uri()).with_timeout(1)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = OpenLibraryClientConfig::default();
        assert_eq!(config.base_url, "https://openlibrary.org");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("judgebook/"));
    }

    #[test]
    fn test_config_builder() {
        let config = OpenLibraryClientConfig::new("http://example.com:9000")
            .with_timeout(3)
            .with_user_agent("test-agent");
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_search_url_trims_trailing_slash() {
        let client =
            OpenLibraryClient::new(OpenLibraryClientConfig::new("http://example.com/")).unwrap();
        assert_eq!(client.search_url(), "http://example.com/search.json");
    }

    #[test]
    fn test_parse_missing_docs_is_empty() {
        let result = parse_search_body(br#"{"numFound": 0}"#).unwrap();
        assert!(result.docs.is_empty());
    }

    #[test]
    fn test_parse_non_array_docs_is_empty() {
        let result = parse_search_body(br#"{"docs": "oops"}"#).unwrap();
        assert!(result.docs.is_empty());
    }

    #[test]
    fn test_parse_skips_non_object_records() {
        let result = parse_search_body(br#"{"docs": [1, {"cover_i": 5}, "x"]}"#).unwrap();
        assert_eq!(result.docs.len(), 1);
        assert_eq!(result.docs[0].cover_i, Some(5));
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        assert!(matches!(
            parse_search_body(b"<html>oops</html>"),
            Err(SearchError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse_search_body(b"[1, 2, 3]"),
            Err(SearchError::InvalidPayload(_))
        ));
    }

    #[tokio::test]
    async fn test_search_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", "science_fiction"))
            .and(query_param("limit", "15"))
            .and(query_param("fields", "title,author_name,cover_i,key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "docs": [{
                    "title": "Dune",
                    "author_name": ["Frank Herbert"],
                    "cover_i": 258027,
                    "key": "/works/OL893415W"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery::for_subject(&Subject::from("science_fiction"));
        let result = client.search(&query).await.unwrap();

        assert_eq!(result.docs.len(), 1);
        assert_eq!(result.docs[0].title.as_deref(), Some("Dune"));
        assert_eq!(result.docs[0].cover_i, Some(258027));
    }

    #[tokio::test]
    async fn test_search_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery::for_subject(&Subject::from("pizza"));
        let err = client.search(&query).await.unwrap_err();

        assert!(matches!(err, SearchError::Status(500)));
    }

    #[tokio::test]
    async fn test_search_non_json_body_is_invalid_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery::for_subject(&Subject::from("horror"));
        let err = client.search(&query).await.unwrap_err();

        assert!(matches!(err, SearchError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn test_search_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"docs": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery::for_subject(&Subject::from("vikings"));
        let err = client.search(&query).await.unwrap_err();

        assert!(matches!(err, SearchError::Timeout));
    }

    #[tokio::test]
    async fn test_search_unreachable_host() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client =
            OpenLibraryClient::new(OpenLibraryClientConfig::new(uri).with_timeout(1)).unwrap();
        let query = SearchQuery::for_subject(&Subject::from("robots"));
        let err = client.search(&query).await.unwrap_err();

        assert!(matches!(err, SearchError::Network(_) | SearchError::Timeout));
    }
}
