//! Per-course progress counts.

use serde::Serialize;

use crate::progression::{LockReason, LockState};

use super::course_view::NodeView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub open: usize,
    pub commercial_locked: usize,
    pub sequence_locked: usize,
}

impl ProgressSummary {
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a NodeView>) -> Self {
        let mut summary = Self::default();
        for view in nodes {
            summary.total += 1;
            if view.node.completion.is_completed() {
                summary.completed += 1;
            }
            match view.lock {
                LockState::Open => summary.open += 1,
                LockState::Locked(LockReason::Commercial) => summary.commercial_locked += 1,
                LockState::Locked(LockReason::Sequence) => summary.sequence_locked += 1,
            }
        }
        summary
    }

    /// Whole percent of nodes completed, rounded down. An empty course is 0%.
    pub fn percent_complete(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }
}
