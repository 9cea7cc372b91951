//! Book Context - Value Objects

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::subject::Subject;

/// 作者缺失时的占位值
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// 标题缺失时的占位值
pub const UNTITLED: &str = "Untitled";

/// 上游搜索服务返回的原始记录
///
/// 所有字段均可缺失。字段为 `null` 或类型不符时视为缺失，
/// 不会导致整个响应解析失败。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawBookRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub author_name: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient")]
    pub cover_i: Option<i64>,

    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub key: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// 归一化后的图书
///
/// 不变量:
/// - cover_url 总是存在（无封面的记录在归一化阶段被丢弃）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub open_library_key: String,
}

/// 某个主题下的图书列表，顺序与上游一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookList {
    pub subject: Subject,
    pub books: Vec<Book>,
}

impl BookList {
    pub fn new(subject: Subject, books: Vec<Book>) -> Self {
        Self { subject, books }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
