//! Subject Query Handlers

use crate::application::queries::GetRandomSubject;
use crate::domain::subject::{pick_random_subject, Subject};

/// GetRandomSubject Handler
///
/// 不访问任何外部服务
#[derive(Debug, Clone, Default)]
pub struct GetRandomSubjectHandler;

impl GetRandomSubjectHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: GetRandomSubject) -> Subject {
        let subject = pick_random_subject();
        tracing::debug!(subject = %subject, "Picked random subject");
        subject
    }
}
