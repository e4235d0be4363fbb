//! Curriculum fetch records.
//!
//! Amounts arrive as decimal major units. A missing `finalPrice` means no
//! discount. Validation rejects negative or non-finite amounts, discounts that
//! raise the price, empty ids and duplicate ids. Orphaned content (unknown
//! `sectionId`) passes through; the assembler drops it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::BoundaryError;
use crate::types::collections::FxHashSet;
use crate::types::content::{Completion, ContentKind, ContentNode, Course, Section};
use crate::types::identifiers::{CourseId, NodeId, SectionId};
use crate::types::money::Money;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub final_price: Option<f64>,
    #[serde(default)]
    pub is_free: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub id: String,
    pub order: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub final_price: Option<f64>,
}

/// A lesson, exam or homework record. The collection it arrives in decides
/// its kind; an explicit `kind` field must agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub section_id: String,
    pub order: i64,
    #[serde(default)]
    pub kind: Option<ContentKind>,
    #[serde(default)]
    pub lesson_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub final_price: Option<f64>,
}

/// Everything the curriculum fetch returns for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumRecords {
    pub course: CourseRecord,
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
    #[serde(default)]
    pub lessons: Vec<ContentRecord>,
    #[serde(default)]
    pub exams: Vec<ContentRecord>,
    #[serde(default)]
    pub homeworks: Vec<ContentRecord>,
}

/// Validated, typed curriculum. Sections carry no nodes yet; the assembler
/// merges the three content collections into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumSnapshot {
    pub course: Course,
    pub sections: Vec<Section>,
    pub lessons: Vec<ContentNode>,
    pub exams: Vec<ContentNode>,
    pub homeworks: Vec<ContentNode>,
}

impl CurriculumSnapshot {
    /// Every content node across the three collections.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut ContentNode> {
        self.lessons
            .iter_mut()
            .chain(self.exams.iter_mut())
            .chain(self.homeworks.iter_mut())
    }
}

impl CurriculumRecords {
    pub fn from_json(json: &str) -> Result<Self, BoundaryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_snapshot(self) -> Result<CurriculumSnapshot, BoundaryError> {
        let course = self.course.into_course()?;

        let mut section_ids = FxHashSet::default();
        let mut section_orders = FxHashSet::default();
        let mut sections = Vec::with_capacity(self.sections.len());
        for record in self.sections {
            let section = record.into_section(&course.id)?;
            if !section_ids.insert(section.id.clone()) {
                return Err(BoundaryError::DuplicateId {
                    entity: "section",
                    id: section.id.to_string(),
                });
            }
            if !section_orders.insert(section.order) {
                warn!(section = %section.id, order = section.order, "Duplicate section order");
            }
            sections.push(section);
        }

        let mut node_ids = FxHashSet::default();
        let lessons = convert_nodes(self.lessons, ContentKind::Lesson, &mut node_ids)?;
        let exams = convert_nodes(self.exams, ContentKind::Exam, &mut node_ids)?;
        let homeworks = convert_nodes(self.homeworks, ContentKind::Homework, &mut node_ids)?;

        Ok(CurriculumSnapshot {
            course,
            sections,
            lessons,
            exams,
            homeworks,
        })
    }
}

impl CourseRecord {
    fn into_course(self) -> Result<Course, BoundaryError> {
        require_id("course", &self.id)?;
        let (price, final_price) = convert_prices("course", &self.id, self.price, self.final_price)?;
        Ok(Course {
            id: CourseId::new(self.id),
            title: self.title,
            price,
            final_price,
            is_free: self.is_free,
        })
    }
}

impl SectionRecord {
    fn into_section(self, course_id: &CourseId) -> Result<Section, BoundaryError> {
        require_id("section", &self.id)?;
        let (price, final_price) =
            convert_prices("section", &self.id, self.price, self.final_price)?;
        Ok(Section {
            id: SectionId::new(self.id),
            course_id: course_id.clone(),
            order: self.order,
            title: self.title,
            price,
            final_price,
            nodes: Vec::new(),
        })
    }
}

impl ContentRecord {
    fn into_node(self, kind: ContentKind) -> Result<ContentNode, BoundaryError> {
        let entity = kind.as_str();
        require_id(entity, &self.id)?;
        if let Some(declared) = self.kind {
            if declared != kind {
                return Err(BoundaryError::KindMismatch {
                    id: self.id,
                    expected: entity,
                    actual: declared.as_str(),
                });
            }
        }
        let (price, final_price) = convert_prices(entity, &self.id, self.price, self.final_price)?;
        Ok(ContentNode {
            id: NodeId::new(self.id),
            kind,
            section_id: SectionId::new(self.section_id),
            lesson_id: self.lesson_id.filter(|l| !l.is_empty()).map(NodeId::new),
            order: self.order,
            title: self.title,
            is_free: self.is_free,
            is_mandatory: self.is_mandatory,
            completion: Completion::Incomplete,
            price,
            final_price,
        })
    }
}

fn convert_nodes(
    records: Vec<ContentRecord>,
    kind: ContentKind,
    seen: &mut FxHashSet<NodeId>,
) -> Result<Vec<ContentNode>, BoundaryError> {
    let mut nodes = Vec::with_capacity(records.len());
    for record in records {
        let node = record.into_node(kind)?;
        if !seen.insert(node.id.clone()) {
            return Err(BoundaryError::DuplicateId {
                entity: kind.as_str(),
                id: node.id.to_string(),
            });
        }
        nodes.push(node);
    }
    Ok(nodes)
}

fn require_id(entity: &'static str, id: &str) -> Result<(), BoundaryError> {
    if id.trim().is_empty() {
        return Err(BoundaryError::EmptyId { entity });
    }
    Ok(())
}

fn convert_prices(
    entity: &'static str,
    id: &str,
    price: f64,
    final_price: Option<f64>,
) -> Result<(Money, Money), BoundaryError> {
    let invalid = |field: &'static str, value: f64| BoundaryError::InvalidPrice {
        entity,
        id: id.to_string(),
        field,
        value,
    };
    let list = Money::from_major(price).ok_or_else(|| invalid("price", price))?;
    let charged = match final_price {
        Some(v) => Money::from_major(v).ok_or_else(|| invalid("finalPrice", v))?,
        None => list,
    };
    if charged > list {
        return Err(BoundaryError::DiscountExceedsPrice {
            entity,
            id: id.to_string(),
        });
    }
    Ok((list, charged))
}
