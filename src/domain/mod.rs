//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Subject Context: 预定义主题与随机选取
//! - Book Context: 上游记录归一化

pub mod book;
pub mod subject;

pub use book::{normalize_record, normalize_records, Book, BookList, RawBookRecord};
pub use subject::{pick_random_subject, Subject, SUBJECTS};
