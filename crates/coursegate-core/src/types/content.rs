//! Curriculum model: courses, sections and the content nodes inside them.

use serde::{Deserialize, Serialize};

use super::identifiers::{CourseId, NodeId, SectionId};
use super::money::Money;

/// What a content node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Lesson,
    Exam,
    Homework,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [Self::Lesson, Self::Exam, Self::Homework];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Exam => "exam",
            Self::Homework => "homework",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lesson" => Some(Self::Lesson),
            "exam" => Some(Self::Exam),
            "homework" => Some(Self::Homework),
            _ => None,
        }
    }
}

/// Completion state of a node for one student.
///
/// Lessons complete when viewed, exams when passed, homework when accepted.
/// The engine receives this precomputed and never re-derives it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    #[default]
    Incomplete,
    Completed,
}

impl Completion {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A lesson, exam or homework inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub id: NodeId,
    pub kind: ContentKind,
    pub section_id: SectionId,
    /// Parent lesson for exams and homework attached to a lesson.
    pub lesson_id: Option<NodeId>,
    pub order: i64,
    pub title: Option<String>,
    pub is_free: bool,
    pub is_mandatory: bool,
    pub completion: Completion,
    pub price: Money,
    pub final_price: Money,
}

impl ContentNode {
    /// A paid, optional, incomplete node with zero price. Builder-style setters
    /// below fill in the rest.
    pub fn new(
        id: impl Into<NodeId>,
        kind: ContentKind,
        section_id: impl Into<SectionId>,
        order: i64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            section_id: section_id.into(),
            lesson_id: None,
            order,
            title: None,
            is_free: false,
            is_mandatory: false,
            completion: Completion::Incomplete,
            price: Money::ZERO,
            final_price: Money::ZERO,
        }
    }

    pub fn free(mut self) -> Self {
        self.is_free = true;
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.is_mandatory = true;
        self
    }

    pub fn completed(mut self) -> Self {
        self.completion = Completion::Completed;
        self
    }

    pub fn priced(mut self, price: Money, final_price: Money) -> Self {
        self.price = price;
        self.final_price = final_price;
        self
    }

    pub fn under_lesson(mut self, lesson_id: impl Into<NodeId>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }

    /// True when this node blocks every node after it.
    pub fn blocks_sequence(&self) -> bool {
        self.is_mandatory && !self.completion.is_completed()
    }
}

/// An ordered container of content nodes, purchasable as a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub course_id: CourseId,
    pub order: i64,
    pub title: Option<String>,
    pub price: Money,
    pub final_price: Money,
    /// Merged and sorted by the curriculum assembler.
    pub nodes: Vec<ContentNode>,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, course_id: impl Into<CourseId>, order: i64) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            order,
            title: None,
            price: Money::ZERO,
            final_price: Money::ZERO,
            nodes: Vec::new(),
        }
    }

    pub fn priced(mut self, price: Money, final_price: Money) -> Self {
        self.price = price;
        self.final_price = final_price;
        self
    }

    pub fn lessons(&self) -> impl Iterator<Item = &ContentNode> {
        self.nodes.iter().filter(|n| n.kind == ContentKind::Lesson)
    }
}

/// A purchasable course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: Option<String>,
    pub price: Money,
    pub final_price: Money,
    pub is_free: bool,
}

impl Course {
    pub fn new(id: impl Into<CourseId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            price: Money::ZERO,
            final_price: Money::ZERO,
            is_free: false,
        }
    }

    pub fn priced(mut self, price: Money, final_price: Money) -> Self {
        self.price = price;
        self.final_price = final_price;
        self
    }

    pub fn free(mut self) -> Self {
        self.is_free = true;
        self
    }
}
