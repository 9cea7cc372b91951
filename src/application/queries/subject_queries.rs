//! Subject Queries

/// 随机主题查询
#[derive(Debug, Clone, Default)]
pub struct GetRandomSubject;
