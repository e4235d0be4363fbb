use super::error_code::GateErrorCode;
use super::{BoundaryError, CheckoutError, ConfigError, PurchaseError, SourceError};

/// Top-level error type for Coursegate.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("boundary error: {0}")]
    Boundary(#[from] BoundaryError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("purchase error: {0}")]
    Purchase(#[from] PurchaseError),

    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl GateErrorCode for GateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Boundary(e) => e.error_code(),
            Self::Source(e) => e.error_code(),
            Self::Purchase(e) => e.error_code(),
            Self::Checkout(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type GateResult<T> = Result<T, GateError>;
