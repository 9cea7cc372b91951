//! Random subject picker

use rand::Rng;

use super::value_objects::{Subject, SUBJECTS};

/// 从预定义列表中均匀随机选取一个主题
pub fn pick_random_subject() -> Subject {
    pick_random_subject_with(&mut rand::rng())
}

/// 使用指定的随机数生成器选取主题（便于测试时固定种子）
pub fn pick_random_subject_with<R: Rng + ?Sized>(rng: &mut R) -> Subject {
    Subject::from(SUBJECTS[rng.random_range(0..SUBJECTS.len())])
}
