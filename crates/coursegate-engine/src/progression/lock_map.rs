use serde::{Deserialize, Serialize};

use coursegate_core::{FxHashMap, NodeId};

/// Why a node is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockReason {
    /// Not owned and not free. The student needs to pay.
    Commercial,
    /// An earlier mandatory node is incomplete.
    Sequence,
}

impl LockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Sequence => "sequence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum LockState {
    Open,
    Locked(LockReason),
}

impl LockState {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// Restrictiveness rank: `Open` < `Sequence` < `Commercial`.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Locked(LockReason::Sequence) => 1,
            Self::Locked(LockReason::Commercial) => 2,
        }
    }

    pub fn reason(&self) -> Option<LockReason> {
        match self {
            Self::Open => None,
            Self::Locked(reason) => Some(*reason),
        }
    }
}

/// Lock states keyed by node id, in curriculum order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockMap {
    entries: Vec<(NodeId, LockState)>,
    index: FxHashMap<NodeId, usize>,
}

impl LockMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records a node's state. A repeated id keeps its first position and
    /// the more restrictive of the two states.
    pub(crate) fn insert(&mut self, id: NodeId, state: LockState) {
        match self.index.get(&id) {
            Some(&i) => {
                let held = &mut self.entries[i].1;
                if state.severity() > held.severity() {
                    *held = state;
                }
            }
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, state));
            }
        }
    }

    pub fn get(&self, id: &NodeId) -> Option<LockState> {
        self.index.get(id).map(|&i| self.entries[i].1)
    }

    /// Unknown nodes read as locked.
    pub fn is_locked(&self, id: &NodeId) -> bool {
        self.get(id).map_or(true, |s| s.is_locked())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, LockState)> {
        self.entries.iter().map(|(id, s)| (id, *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, state: LockState) -> usize {
        self.entries.iter().filter(|(_, s)| *s == state).count()
    }
}
