//! # coursegate-engine
//!
//! Content access and progression gating.
//!
//! Pipeline: fetched snapshots → [`curriculum`] → {[`progression`], [`pricing`]},
//! with [`entitlement`] feeding the progression gate. Every stage is a pure
//! function over immutable input. [`session`] holds the latest snapshots and
//! [`checkout`] drives purchases through the external gateway.

pub mod checkout;
pub mod curriculum;
pub mod entitlement;
pub mod pricing;
pub mod progression;
pub mod session;
pub mod view;

pub use checkout::checkout;
pub use curriculum::{assemble, assemble_with, flatten};
pub use entitlement::{derive_entitlements, is_entitled, node_target};
pub use pricing::quote;
pub use progression::{evaluate, evaluate_with, LockMap, LockReason, LockState};
pub use session::{CourseSession, FetchTicket, Resource, SnapshotPayload};
pub use view::{CourseView, NodeView, ProgressSummary, SectionView};
