//! Subject Context - Value Objects

use serde::{Deserialize, Serialize};

/// 预定义主题列表（顺序固定）
pub const SUBJECTS: [&str; 15] = [
    "science_fiction",
    "fantasy",
    "mystery",
    "romance",
    "horror",
    "historical_fiction",
    "robots",
    "pizza",
    "pirates",
    "time_travel",
    "vikings",
    "cyberpunk",
    "gardening",
    "minimalism",
    "basketball",
];

/// 主题 - 作为自由文本搜索词使用
///
/// 任意字符串都是合法主题，不要求出现在 [`SUBJECTS`] 中。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// 是否属于预定义主题列表
    pub fn is_predefined(&self) -> bool {
        SUBJECTS.contains(&self.0.as_str())
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
