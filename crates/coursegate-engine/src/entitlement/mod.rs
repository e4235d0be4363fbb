//! Entitlement resolution.
//!
//! - **resolver**: "is this course/section/lesson owned?"
//! - **derive**: builds an `EntitlementSet` from subscription records

pub mod derive;
pub mod resolver;

pub use derive::derive_entitlements;
pub use resolver::{is_entitled, node_target};
