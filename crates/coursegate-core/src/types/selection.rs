//! Pending purchase requests and their quotes.

use serde::{Deserialize, Serialize};

use super::identifiers::{NodeId, SectionId};
use super::money::Money;

/// The scope a student wants to buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum SubscriptionSelection {
    Course,
    Section {
        #[serde(rename = "sectionId")]
        section_id: SectionId,
    },
    Custom {
        #[serde(rename = "lessonIds")]
        lesson_ids: Vec<NodeId>,
    },
}

impl SubscriptionSelection {
    pub fn scope(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Section { .. } => "section",
            Self::Custom { .. } => "custom",
        }
    }
}

/// Result of pricing a selection.
///
/// `price` is the amount charged (sum of final prices); `list_price` is the
/// pre-discount reference used for display. An invalid quote blocks checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub price: Money,
    pub list_price: Money,
    pub is_valid: bool,
}

impl Quote {
    pub fn valid(price: Money, list_price: Money) -> Self {
        Self {
            price,
            list_price,
            is_valid: true,
        }
    }

    pub fn invalid(price: Money, list_price: Money) -> Self {
        Self {
            price,
            list_price,
            is_valid: false,
        }
    }

    pub fn savings(&self) -> Money {
        self.list_price.saturating_sub(self.price)
    }
}
