//! Errors from the quote-then-submit checkout flow.

use super::error_code::{self, GateErrorCode};
use super::PurchaseError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Selection '{scope}' is not purchasable")]
    InvalidSelection { scope: &'static str },

    #[error("Selection '{scope}' is already owned")]
    AlreadyOwned { scope: &'static str },

    #[error("Purchase failed: {0}")]
    Purchase(#[from] PurchaseError),
}

impl GateErrorCode for CheckoutError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSelection { .. } => error_code::CHECKOUT_INVALID_SELECTION,
            Self::AlreadyOwned { .. } => error_code::CHECKOUT_ALREADY_OWNED,
            Self::Purchase(e) => e.error_code(),
        }
    }
}
