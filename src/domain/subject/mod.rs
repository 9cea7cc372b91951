//! Subject Context - 主题限界上下文
//!
//! 职责:
//! - 预定义主题列表
//! - 随机主题选取（驱动前端的 "Discovery" 流程）

mod picker;
mod value_objects;

pub use picker::{pick_random_subject, pick_random_subject_with};
pub use value_objects::{Subject, SUBJECTS};
