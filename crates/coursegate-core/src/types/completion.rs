//! Set of completed nodes for one student in one course.

use serde::{Deserialize, Serialize};

use super::collections::FxHashSet;
use super::content::{Completion, ContentNode};
use super::identifiers::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSet {
    completed: FxHashSet<NodeId>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId) {
        self.completed.insert(id);
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.completed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Overwrites each node's completion state from this set.
    /// Nodes absent from the set become incomplete.
    pub fn apply<'a>(&self, nodes: impl IntoIterator<Item = &'a mut ContentNode>) {
        for node in nodes {
            node.completion = if self.completed.contains(&node.id) {
                Completion::Completed
            } else {
                Completion::Incomplete
            };
        }
    }
}

impl FromIterator<NodeId> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}
