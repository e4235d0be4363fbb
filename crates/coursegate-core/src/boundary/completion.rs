//! Completion fetch records.

use serde::{Deserialize, Serialize};

use crate::types::completion::CompletionSet;
use crate::types::content::ContentKind;
use crate::types::identifiers::NodeId;

/// One node's completion as reported upstream (lesson viewed, exam passed,
/// homework accepted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub node_id: String,
    #[serde(default)]
    pub kind: Option<ContentKind>,
    pub completed: bool,
}

impl CompletionSet {
    pub fn from_records(records: &[CompletionRecord]) -> Self {
        records
            .iter()
            .filter(|r| r.completed && !r.node_id.is_empty())
            .map(|r| NodeId::new(r.node_id.clone()))
            .collect()
    }
}
