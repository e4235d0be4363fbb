//! Error types for the fetch boundary, collaborators and orchestration.
//!
//! The gating functions themselves are total and never return errors.

pub mod boundary_error;
pub mod checkout_error;
pub mod config_error;
pub mod error_code;
pub mod gate_error;
pub mod purchase_error;
pub mod source_error;

pub use boundary_error::BoundaryError;
pub use checkout_error::CheckoutError;
pub use config_error::ConfigError;
pub use gate_error::{GateError, GateResult};
pub use purchase_error::PurchaseError;
pub use source_error::SourceError;
