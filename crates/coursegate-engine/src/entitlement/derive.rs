//! Entitlement derivation from subscription records.

use chrono::{DateTime, Utc};
use tracing::debug;

use coursegate_core::boundary::{SubscriptionRecord, SubscriptionTargetRecord};
use coursegate_core::config::EntitlementConfig;
use coursegate_core::types::EntitlementSet;
use coursegate_core::{CourseId, NodeId, SectionId};

/// Collect the scopes granted by every record in force at `now`.
///
/// Records that are not `active`, or are past `expiresAt` plus the configured
/// grace, contribute nothing. Empty ids are skipped.
pub fn derive_entitlements(
    records: &[SubscriptionRecord],
    now: DateTime<Utc>,
    config: &EntitlementConfig,
) -> EntitlementSet {
    let mut set = EntitlementSet::new();
    let mut skipped = 0usize;

    for record in records {
        if !record.is_in_force(now, config.expiry_grace_secs) {
            skipped += 1;
            continue;
        }
        match &record.target {
            SubscriptionTargetRecord::Course { course_id } if !course_id.is_empty() => {
                set.course_ids.insert(CourseId::new(course_id.as_str()));
            }
            SubscriptionTargetRecord::Section { section_id } if !section_id.is_empty() => {
                set.section_ids.insert(SectionId::new(section_id.as_str()));
            }
            SubscriptionTargetRecord::Lessons { lesson_ids } => {
                set.lesson_ids.extend(
                    lesson_ids
                        .iter()
                        .filter(|id| !id.is_empty())
                        .map(|id| NodeId::new(id.as_str())),
                );
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            skipped,
            total = records.len(),
            "Subscription records not contributing to entitlements"
        );
    }
    set
}
