//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（BookSearch）
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{BookSearchPort, SearchError, SearchQuery, SearchResult};

pub use queries::{
    handlers::{GetBooksBySubjectHandler, GetRandomSubjectHandler},
    GetBooksBySubject, GetRandomSubject,
};
