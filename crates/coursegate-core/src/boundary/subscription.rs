//! Subscription records from the entitlement fetch.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Pending,
    Cancelled,
    Expired,
    /// Any status this build does not know. Grants nothing.
    #[serde(other)]
    Unknown,
}

/// What a subscription record grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubscriptionTargetRecord {
    Course {
        #[serde(rename = "courseId")]
        course_id: String,
    },
    Section {
        #[serde(rename = "sectionId")]
        section_id: String,
    },
    Lessons {
        #[serde(rename = "lessonIds")]
        lesson_ids: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub id: String,
    pub status: SubscriptionStatus,
    pub target: SubscriptionTargetRecord,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl SubscriptionRecord {
    /// Active and not past `expires_at + grace` at `now`.
    pub fn is_in_force(&self, now: DateTime<Utc>, grace_secs: u64) -> bool {
        if self.status != SubscriptionStatus::Active {
            return false;
        }
        match self.expires_at {
            None => true,
            Some(expires_at) => {
                let grace = i64::try_from(grace_secs)
                    .ok()
                    .and_then(Duration::try_seconds);
                match grace.and_then(|g| expires_at.checked_add_signed(g)) {
                    Some(deadline) => now < deadline,
                    // Grace so large the deadline is unrepresentable.
                    None => true,
                }
            }
        }
    }
}
