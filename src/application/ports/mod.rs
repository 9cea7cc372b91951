//! Application Ports - 出站端口定义

mod book_search;

pub use book_search::{
    BookSearchPort, SearchError, SearchQuery, SearchResult, SEARCH_FIELDS, SEARCH_LIMIT,
};
