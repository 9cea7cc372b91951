//! Open Library Adapter - 图书搜索客户端实现

mod fake_client;
mod http_client;

pub use fake_client::FakeBookSearchClient;
pub use http_client::*;
