//! Shared curriculum fixtures for engine tests.

#![allow(dead_code)]

use coursegate_core::types::{ContentKind, ContentNode, Course, Section};
use coursegate_core::Money;

pub const COURSE: &str = "c1";

pub fn money(major: u64) -> Money {
    Money::from_major_units(major)
}

pub fn course() -> Course {
    Course::new(COURSE).priced(money(500), money(400))
}

pub fn section(id: &str, order: i64) -> Section {
    Section::new(id, COURSE, order).priced(money(200), money(150))
}

pub fn lesson(id: &str, section: &str, order: i64) -> ContentNode {
    ContentNode::new(id, ContentKind::Lesson, section, order).priced(money(50), money(40))
}

pub fn exam(id: &str, section: &str, order: i64) -> ContentNode {
    ContentNode::new(id, ContentKind::Exam, section, order)
}

pub fn homework(id: &str, section: &str, order: i64) -> ContentNode {
    ContentNode::new(id, ContentKind::Homework, section, order)
}

/// Sections with nodes already placed, in curriculum order.
pub fn curriculum(layout: Vec<(Section, Vec<ContentNode>)>) -> Vec<Section> {
    layout
        .into_iter()
        .map(|(mut s, nodes)| {
            s.nodes = nodes;
            s
        })
        .collect()
}

pub fn ids<'a>(nodes: impl Iterator<Item = &'a ContentNode>) -> Vec<String> {
    nodes.map(|n| n.id.to_string()).collect()
}
