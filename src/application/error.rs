//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::SearchError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 外部图书搜索服务不可用（网络错误、超时、非成功状态码、响应无法解析）
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl ApplicationError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(message.into())
    }
}

impl From<SearchError> for ApplicationError {
    fn from(err: SearchError) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_search_error_is_upstream_unavailable() {
        let errors = vec![
            SearchError::Network("connection refused".into()),
            SearchError::Timeout,
            SearchError::Status(500),
            SearchError::InvalidPayload("expected value".into()),
        ];

        for err in errors {
            assert!(matches!(
                ApplicationError::from(err),
                ApplicationError::UpstreamUnavailable(_)
            ));
        }
    }
}
