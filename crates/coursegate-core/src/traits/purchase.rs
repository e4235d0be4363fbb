use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PurchaseError;
use crate::types::identifiers::{CourseId, StudentId};
use crate::types::money::Money;
use crate::types::selection::SubscriptionSelection;

/// How the student pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    Card { token: String },
    MobileWallet { phone: String },
    Voucher { code: String },
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card { .. } => "card",
            Self::MobileWallet { .. } => "mobile_wallet",
            Self::Voucher { .. } => "voucher",
        }
    }
}

/// A quoted selection ready to be charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub selection: SubscriptionSelection,
    pub payment_method: PaymentMethod,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub subscription_id: String,
    pub charged: Money,
    pub completed_at: DateTime<Utc>,
}

/// Payment execution. On success the caller must invalidate and refetch
/// entitlements.
pub trait PurchaseGateway: Send + Sync {
    fn submit(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt, PurchaseError>;
}
