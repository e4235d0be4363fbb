//! Progression gating configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::content::ContentKind;

/// Tie-break ranking for nodes sharing an `order` within a section.
/// Earlier in the list sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindPriority([ContentKind; 3]);

impl KindPriority {
    pub const fn new(order: [ContentKind; 3]) -> Self {
        Self(order)
    }

    /// Position of `kind` in the ranking. Kinds missing from a malformed
    /// ranking sort last.
    pub fn rank(&self, kind: ContentKind) -> u8 {
        self.0
            .iter()
            .position(|k| *k == kind)
            .map(|p| p as u8)
            .unwrap_or(u8::MAX)
    }

    pub fn kinds(&self) -> &[ContentKind; 3] {
        &self.0
    }

    /// True when every kind appears exactly once.
    pub fn is_permutation(&self) -> bool {
        ContentKind::ALL
            .iter()
            .all(|k| self.0.iter().filter(|x| *x == k).count() == 1)
    }
}

impl Default for KindPriority {
    fn default() -> Self {
        Self([ContentKind::Lesson, ContentKind::Homework, ContentKind::Exam])
    }
}

/// Configuration for the progression gate evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Free nodes are still locked behind an incomplete mandatory node.
    pub sequence_locks_free_content: bool,
    /// A course flagged free opens every node commercially. Off by default,
    /// so only node-level `is_free` and entitlements decide the commercial lock.
    pub free_course_opens_all: bool,
    pub kind_priority: KindPriority,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            sequence_locks_free_content: true,
            free_course_opens_all: false,
            kind_priority: KindPriority::default(),
        }
    }
}

impl ProgressionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.kind_priority.is_permutation() {
            return Err(ConfigError::Invalid {
                field: "progression.kind_priority",
                message: format!(
                    "must list lesson, exam and homework exactly once, got {:?}",
                    self.kind_priority.kinds()
                ),
            });
        }
        Ok(())
    }
}
