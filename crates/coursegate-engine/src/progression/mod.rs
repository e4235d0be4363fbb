//! Progression gating: one lock state per node.
//!
//! - **lock_map**: `LockState`, `LockReason` and the ordered `LockMap`
//! - **evaluator**: the sequential walk combining commercial and sequence locks

pub mod evaluator;
pub mod lock_map;

pub use evaluator::{evaluate, evaluate_with};
pub use lock_map::{LockMap, LockReason, LockState};
