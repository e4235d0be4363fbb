//! Sequential gate walk.
//!
//! For each node in curriculum order:
//! 1. commercially locked = not free and not entitled
//! 2. locked = sequence broken or commercially locked. Commercial wins the
//!    reason when both hold.
//! 3. an incomplete mandatory node breaks the sequence for every later node,
//!    never for itself.

use tracing::trace;

use coursegate_core::config::ProgressionConfig;
use coursegate_core::types::{ContentNode, Course, EntitlementSet, Section};

use crate::curriculum::flatten;
use crate::entitlement::{is_entitled, node_target};

use super::lock_map::{LockMap, LockReason, LockState};

/// Evaluate with default progression settings.
pub fn evaluate(course: &Course, sections: &[Section], entitlements: &EntitlementSet) -> LockMap {
    evaluate_with(course, sections, entitlements, &ProgressionConfig::default())
}

pub fn evaluate_with(
    course: &Course,
    sections: &[Section],
    entitlements: &EntitlementSet,
    config: &ProgressionConfig,
) -> LockMap {
    let course_open = course.is_free && config.free_course_opens_all;
    let mut map = LockMap::with_capacity(sections.iter().map(|s| s.nodes.len()).sum());
    let mut sequence_broken = false;

    for node in flatten(sections) {
        let commercially_locked = !course_open && is_commercially_locked(node, course, entitlements);
        let sequence_locked =
            sequence_broken && (config.sequence_locks_free_content || !node.is_free);

        let state = if commercially_locked {
            LockState::Locked(LockReason::Commercial)
        } else if sequence_locked {
            LockState::Locked(LockReason::Sequence)
        } else {
            LockState::Open
        };
        map.insert(node.id.clone(), state);

        if node.blocks_sequence() && !sequence_broken {
            trace!(node = %node.id, "Sequence broken by incomplete mandatory node");
            sequence_broken = true;
        }
    }

    map
}

fn is_commercially_locked(node: &ContentNode, course: &Course, entitlements: &EntitlementSet) -> bool {
    !node.is_free && !is_entitled(entitlements, node_target(node, &course.id))
}
