//! Quote-then-submit purchase flow.
//!
//! The gate never grants access itself: a successful charge only invalidates
//! the session's entitlements so the next refresh picks up the new subscription.

use tracing::{info, warn};

use coursegate_core::errors::{CheckoutError, PurchaseError};
use coursegate_core::traits::{PaymentMethod, PurchaseGateway, PurchaseReceipt, PurchaseRequest};
use coursegate_core::types::SubscriptionSelection;

use crate::session::{CourseSession, Resource};

pub fn checkout(
    session: &CourseSession,
    gateway: &dyn PurchaseGateway,
    selection: SubscriptionSelection,
    payment_method: PaymentMethod,
) -> Result<PurchaseReceipt, CheckoutError> {
    let scope = selection.scope();
    let quote = session.quote(&selection);
    if !quote.is_valid {
        return Err(CheckoutError::InvalidSelection { scope });
    }
    if session.owns(&selection) {
        return Err(CheckoutError::AlreadyOwned { scope });
    }

    let request = PurchaseRequest {
        student_id: session.student_id().clone(),
        course_id: session.course_id().clone(),
        selection,
        payment_method,
        amount: quote.price,
    };

    let receipt = gateway.submit(&request).inspect_err(|e| {
        warn!(
            course = %request.course_id,
            scope,
            method = request.payment_method.as_str(),
            retryable = e.is_retryable(),
            error = %e,
            "Purchase failed"
        );
    })?;

    // The charge went through either way, so entitlements must be refetched.
    session.invalidate(Resource::Entitlements);

    if receipt.charged != quote.price {
        warn!(
            subscription = %receipt.subscription_id,
            quoted = %quote.price,
            charged = %receipt.charged,
            "Charged amount differs from quote"
        );
        return Err(PurchaseError::AmountMismatch {
            quoted: quote.price,
            charged: receipt.charged,
        }
        .into());
    }

    info!(
        course = %request.course_id,
        subscription = %receipt.subscription_id,
        scope,
        amount = %receipt.charged,
        "Purchase completed"
    );
    Ok(receipt)
}
