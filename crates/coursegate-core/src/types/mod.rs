//! Curriculum, entitlement and purchase model types.

pub mod collections;
pub mod completion;
pub mod content;
pub mod entitlement;
pub mod identifiers;
pub mod money;
pub mod selection;

pub use completion::CompletionSet;
pub use content::{Completion, ContentKind, ContentNode, Course, Section};
pub use entitlement::{EntitlementSet, EntitlementTarget};
pub use selection::{Quote, SubscriptionSelection};
