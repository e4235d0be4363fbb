use crate::boundary::{CompletionRecord, CurriculumRecords, SubscriptionRecord};
use crate::errors::SourceError;
use crate::types::identifiers::{CourseId, StudentId};

/// Curriculum fetch: course, sections and the three content collections.
pub trait CurriculumSource: Send + Sync {
    fn fetch_curriculum(&self, course_id: &CourseId) -> Result<CurriculumRecords, SourceError>;
}

/// Entitlement fetch: a student's subscription records.
pub trait EntitlementSource: Send + Sync {
    fn fetch_subscriptions(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<SubscriptionRecord>, SourceError>;
}

/// Completion fetch: per-node completion for a student in a course.
pub trait CompletionSource: Send + Sync {
    fn fetch_completion(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Vec<CompletionRecord>, SourceError>;
}
