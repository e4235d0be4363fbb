//! Seams for the external content/commerce service.
//!
//! Transport is the implementor's concern. Every trait is object-safe and
//! `Send + Sync` so a session can hold `&dyn` references to them.

pub mod purchase;
pub mod sources;

pub use purchase::{PaymentMethod, PurchaseGateway, PurchaseReceipt, PurchaseRequest};
pub use sources::{CompletionSource, CurriculumSource, EntitlementSource};
