//! Book Context - 图书限界上下文
//!
//! 职责:
//! - 上游原始记录（RawBookRecord）的宽松解析
//! - 原始记录到 Book 的归一化与过滤（无封面的记录一律丢弃）

mod normalize;
mod value_objects;

pub use normalize::{cover_url, normalize_record, normalize_records, COVER_URL_BASE};
pub use value_objects::{Book, BookList, RawBookRecord, UNKNOWN_AUTHOR, UNTITLED};
