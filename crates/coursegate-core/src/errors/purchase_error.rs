//! Failures reported by the payment gateway.

use crate::types::money::Money;

use super::error_code::{self, GateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error("Payment declined: {reason}")]
    Declined { reason: String },

    #[error("Payment gateway unavailable: {message}")]
    Unavailable { message: String },

    #[error("Charged amount {charged} does not match quoted {quoted}")]
    AmountMismatch { quoted: Money, charged: Money },
}

impl PurchaseError {
    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl GateErrorCode for PurchaseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Declined { .. } => error_code::PURCHASE_DECLINED,
            Self::Unavailable { .. } => error_code::PURCHASE_UNAVAILABLE,
            Self::AmountMismatch { .. } => error_code::PURCHASE_AMOUNT_MISMATCH,
        }
    }
}
