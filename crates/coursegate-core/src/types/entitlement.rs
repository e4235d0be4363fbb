//! Owned purchase scopes for one student.

use serde::{Deserialize, Serialize};

use super::collections::FxHashSet;
use super::identifiers::{CourseId, NodeId, SectionId};

/// Courses, sections and lessons a student owns.
///
/// Exams and homework are never purchased directly; their access derives from
/// the parent lesson, section or course. The gating engine only reads this set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitlementSet {
    pub course_ids: FxHashSet<CourseId>,
    pub section_ids: FxHashSet<SectionId>,
    pub lesson_ids: FxHashSet<NodeId>,
}

impl EntitlementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_course(mut self, id: impl Into<CourseId>) -> Self {
        self.course_ids.insert(id.into());
        self
    }

    pub fn with_section(mut self, id: impl Into<SectionId>) -> Self {
        self.section_ids.insert(id.into());
        self
    }

    pub fn with_lesson(mut self, id: impl Into<NodeId>) -> Self {
        self.lesson_ids.insert(id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty() && self.section_ids.is_empty() && self.lesson_ids.is_empty()
    }
}

/// Something whose ownership can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitlementTarget<'a> {
    Course {
        id: &'a CourseId,
    },
    Section {
        id: &'a SectionId,
        course_id: &'a CourseId,
    },
    Lesson {
        id: &'a NodeId,
        section_id: &'a SectionId,
        course_id: &'a CourseId,
    },
}

impl EntitlementTarget<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Course { .. } => "course",
            Self::Section { .. } => "section",
            Self::Lesson { .. } => "lesson",
        }
    }
}
