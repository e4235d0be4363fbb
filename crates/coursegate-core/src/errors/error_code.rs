//! Stable error codes surfaced to callers.

/// Every error enum maps each variant to one of these codes.
pub trait GateErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const BOUNDARY_INVALID_PRICE: &str = "BOUNDARY_INVALID_PRICE";
pub const BOUNDARY_DISCOUNT_EXCEEDS_PRICE: &str = "BOUNDARY_DISCOUNT_EXCEEDS_PRICE";
pub const BOUNDARY_EMPTY_ID: &str = "BOUNDARY_EMPTY_ID";
pub const BOUNDARY_DUPLICATE_ID: &str = "BOUNDARY_DUPLICATE_ID";
pub const BOUNDARY_KIND_MISMATCH: &str = "BOUNDARY_KIND_MISMATCH";
pub const BOUNDARY_MALFORMED: &str = "BOUNDARY_MALFORMED";

pub const SOURCE_UNAVAILABLE: &str = "SOURCE_UNAVAILABLE";
pub const SOURCE_NOT_FOUND: &str = "SOURCE_NOT_FOUND";
pub const SOURCE_MALFORMED: &str = "SOURCE_MALFORMED";
pub const SOURCE_MISMATCH: &str = "SOURCE_MISMATCH";

pub const PURCHASE_DECLINED: &str = "PURCHASE_DECLINED";
pub const PURCHASE_UNAVAILABLE: &str = "PURCHASE_UNAVAILABLE";
pub const PURCHASE_AMOUNT_MISMATCH: &str = "PURCHASE_AMOUNT_MISMATCH";

pub const CHECKOUT_INVALID_SELECTION: &str = "CHECKOUT_INVALID_SELECTION";
pub const CHECKOUT_ALREADY_OWNED: &str = "CHECKOUT_ALREADY_OWNED";

pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
