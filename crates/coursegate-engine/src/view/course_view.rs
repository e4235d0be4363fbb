use serde::Serialize;

use coursegate_core::config::ProgressionConfig;
use coursegate_core::types::{ContentNode, Course, EntitlementSet, Section};
use coursegate_core::{NodeId, SectionId};

use crate::progression::{evaluate_with, LockMap, LockReason, LockState};

use super::progress::ProgressSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub node: ContentNode,
    pub lock: LockState,
}

impl NodeView {
    /// Open and not yet completed.
    pub fn is_actionable(&self) -> bool {
        !self.lock.is_locked() && !self.node.completion.is_completed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub id: SectionId,
    pub order: i64,
    pub title: Option<String>,
    pub nodes: Vec<NodeView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub course: Course,
    pub sections: Vec<SectionView>,
    pub progress: ProgressSummary,
}

impl CourseView {
    /// Evaluate the gate over assembled sections and attach each node's state.
    pub fn build(
        course: Course,
        sections: Vec<Section>,
        entitlements: &EntitlementSet,
        config: &ProgressionConfig,
    ) -> Self {
        let locks = evaluate_with(&course, &sections, entitlements, config);
        Self::from_parts(course, sections, &locks)
    }

    pub fn from_parts(course: Course, sections: Vec<Section>, locks: &LockMap) -> Self {
        let sections: Vec<SectionView> = sections
            .into_iter()
            .map(|section| SectionView {
                id: section.id,
                order: section.order,
                title: section.title,
                nodes: section
                    .nodes
                    .into_iter()
                    .map(|node| {
                        // Absent from the map means it was never evaluated; keep it closed.
                        let lock = locks
                            .get(&node.id)
                            .unwrap_or(LockState::Locked(LockReason::Commercial));
                        NodeView { node, lock }
                    })
                    .collect(),
            })
            .collect();
        let progress = ProgressSummary::from_nodes(sections.iter().flat_map(|s| s.nodes.iter()));
        Self {
            course,
            sections,
            progress,
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeView> {
        self.sections.iter().flat_map(|s| s.nodes.iter())
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeView> {
        self.nodes().find(|n| &n.node.id == id)
    }

    pub fn lock_state(&self, id: &NodeId) -> Option<LockState> {
        self.node(id).map(|n| n.lock)
    }

    /// "Continue learning": the first open node the student has not completed.
    pub fn continue_node(&self) -> Option<&NodeView> {
        self.nodes().find(|n| n.is_actionable())
    }
}
