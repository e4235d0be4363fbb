//! Wire records from the content/commerce service and their validation into
//! the typed model.
//!
//! ## Components
//! - **curriculum**: course, section, lesson, exam and homework records
//! - **subscription**: subscription records that entitlements derive from
//! - **completion**: per-node completion records

pub mod completion;
pub mod curriculum;
pub mod subscription;

pub use completion::CompletionRecord;
pub use curriculum::{
    ContentRecord, CourseRecord, CurriculumRecords, CurriculumSnapshot, SectionRecord,
};
pub use subscription::{SubscriptionRecord, SubscriptionStatus, SubscriptionTargetRecord};
