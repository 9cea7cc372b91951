//! 应用层 - 查询（读操作）
//!
//! 本服务只有读操作，没有命令侧

mod book_queries;
mod subject_queries;

pub mod handlers;

pub use book_queries::*;
pub use subject_queries::*;
