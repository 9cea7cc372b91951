//! Query Handlers 实现

mod book_handlers;
mod subject_handlers;

pub use book_handlers::*;
pub use subject_handlers::*;
