//! Judgebook - 图书封面 "速配" 后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Subject Context: 预定义主题与随机选取
//! - Book Context: 上游记录归一化与无封面过滤
//!
//! 应用层 (application/):
//! - Ports: BookSearchPort
//! - Queries: GetRandomSubject, GetBooksBySubject
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Adapters: Open Library 搜索客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
