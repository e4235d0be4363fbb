//! Section/content merge and ordering.
//!
//! Nodes sort by `(order, kind priority, id)` inside their section; sections
//! sort by `(order, id)`. Sections repeating an id are merged into one, keyed
//! on the lowest `(order, course, title, final price, price)` copy. Content
//! pointing at an unknown section is dropped.
//! The result depends only on the input contents, never on input ordering.

use tracing::debug;

use coursegate_core::boundary::CurriculumSnapshot;
use coursegate_core::config::KindPriority;
use coursegate_core::types::{ContentNode, Section};
use coursegate_core::{FxHashMap, NodeId, SectionId};

/// Assemble with the default `lesson < homework < exam` tie-break.
pub fn assemble(
    sections: Vec<Section>,
    lessons: Vec<ContentNode>,
    exams: Vec<ContentNode>,
    homeworks: Vec<ContentNode>,
) -> Vec<Section> {
    assemble_with(sections, lessons, exams, homeworks, &KindPriority::default())
}

pub fn assemble_with(
    sections: Vec<Section>,
    lessons: Vec<ContentNode>,
    exams: Vec<ContentNode>,
    homeworks: Vec<ContentNode>,
    priority: &KindPriority,
) -> Vec<Section> {
    let mut sections = merge_repeated_sections(sections);
    sections.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));

    let index: FxHashMap<SectionId, usize> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.clone(), i))
        .collect();

    let mut orphaned = 0usize;
    for node in lessons.into_iter().chain(exams).chain(homeworks) {
        match index.get(&node.section_id) {
            Some(&i) => sections[i].nodes.push(node),
            None => orphaned += 1,
        }
    }

    for section in &mut sections {
        section
            .nodes
            .sort_by(|a, b| node_sort_key(a, priority).cmp(&node_sort_key(b, priority)));
    }

    if orphaned > 0 {
        debug!(orphaned, "Dropped content with unknown section");
    }
    sections
}

fn merge_repeated_sections(mut sections: Vec<Section>) -> Vec<Section> {
    sections.sort_by(|a, b| {
        a.id.cmp(&b.id)
            .then_with(|| a.order.cmp(&b.order))
            .then_with(|| a.course_id.cmp(&b.course_id))
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.final_price.cmp(&b.final_price))
            .then_with(|| a.price.cmp(&b.price))
    });

    let mut merged: Vec<Section> = Vec::with_capacity(sections.len());
    let mut repeated = 0usize;
    for section in sections {
        match merged.last_mut() {
            Some(kept) if kept.id == section.id => {
                kept.nodes.extend(section.nodes);
                repeated += 1;
            }
            _ => merged.push(section),
        }
    }
    if repeated > 0 {
        debug!(repeated, "Merged sections sharing an id");
    }
    merged
}

/// Assemble a validated snapshot using the configured tie-break.
pub fn assemble_snapshot(snapshot: CurriculumSnapshot, priority: &KindPriority) -> Vec<Section> {
    assemble_with(
        snapshot.sections,
        snapshot.lessons,
        snapshot.exams,
        snapshot.homeworks,
        priority,
    )
}

/// Position of a node within its section.
pub fn node_sort_key<'a>(node: &'a ContentNode, priority: &KindPriority) -> (i64, u8, &'a NodeId) {
    (node.order, priority.rank(node.kind), &node.id)
}

/// Every node in curriculum order: section order, then node order.
pub fn flatten(sections: &[Section]) -> impl Iterator<Item = &ContentNode> {
    sections.iter().flat_map(|s| s.nodes.iter())
}
