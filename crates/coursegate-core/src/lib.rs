//! # coursegate-core
//!
//! Foundation crate for the Coursegate access engine.
//! Defines the curriculum model, identifiers, money, errors, config, tracing,
//! fetch-boundary records and the traits for external collaborators.
//! The engine crate depends on this.

pub mod boundary;
pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::GateConfig;
pub use errors::error_code::GateErrorCode;
pub use errors::{GateError, GateResult};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{CourseId, NodeId, SectionId, StudentId};
pub use types::money::Money;
