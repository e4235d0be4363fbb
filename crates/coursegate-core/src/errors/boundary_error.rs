//! Errors raised while validating fetched records into the typed model.

use super::error_code::{self, GateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("Invalid {field} on {entity} '{id}': {value}")]
    InvalidPrice {
        entity: &'static str,
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Final price exceeds price on {entity} '{id}'")]
    DiscountExceedsPrice { entity: &'static str, id: String },

    #[error("Empty id on {entity}")]
    EmptyId { entity: &'static str },

    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Record '{id}' listed as {expected} but declares kind {actual}")]
    KindMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl GateErrorCode for BoundaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPrice { .. } => error_code::BOUNDARY_INVALID_PRICE,
            Self::DiscountExceedsPrice { .. } => error_code::BOUNDARY_DISCOUNT_EXCEEDS_PRICE,
            Self::EmptyId { .. } => error_code::BOUNDARY_EMPTY_ID,
            Self::DuplicateId { .. } => error_code::BOUNDARY_DUPLICATE_ID,
            Self::KindMismatch { .. } => error_code::BOUNDARY_KIND_MISMATCH,
            Self::Malformed(_) => error_code::BOUNDARY_MALFORMED,
        }
    }
}
