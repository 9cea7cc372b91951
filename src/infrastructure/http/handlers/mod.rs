//! HTTP Handlers

mod book;
mod root;
mod subject;

pub use book::*;
pub use root::*;
pub use subject::*;
