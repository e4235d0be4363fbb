//! Quotes a purchase scope against the assembled curriculum.
//!
//! Invalid selections are reported through `Quote::is_valid`, never as errors,
//! so the caller can disable checkout.

use coursegate_core::types::{Course, Quote, Section, SubscriptionSelection};
use coursegate_core::{FxHashMap, FxHashSet, Money, NodeId};

pub fn quote(selection: &SubscriptionSelection, course: &Course, sections: &[Section]) -> Quote {
    match selection {
        SubscriptionSelection::Course => Quote::valid(course.final_price, course.price),
        SubscriptionSelection::Section { section_id } => {
            match sections.iter().find(|s| &s.id == section_id) {
                Some(section) => Quote::valid(section.final_price, section.price),
                None => Quote::invalid(Money::ZERO, Money::ZERO),
            }
        }
        SubscriptionSelection::Custom { lesson_ids } => quote_lessons(lesson_ids, sections),
    }
}

/// Sums final prices of the selected lessons. Unknown ids add nothing but
/// invalidate the quote; a repeated id is charged once.
fn quote_lessons(lesson_ids: &[NodeId], sections: &[Section]) -> Quote {
    let lessons: FxHashMap<&NodeId, (Money, Money)> = sections
        .iter()
        .flat_map(|s| s.lessons())
        .map(|n| (&n.id, (n.final_price, n.price)))
        .collect();

    let mut seen: FxHashSet<&NodeId> = FxHashSet::default();
    let mut price = Money::ZERO;
    let mut list_price = Money::ZERO;
    let mut all_resolved = true;

    for id in lesson_ids {
        if !seen.insert(id) {
            continue;
        }
        match lessons.get(id) {
            Some(&(final_price, reference)) => {
                price = price + final_price;
                list_price = list_price + reference;
            }
            None => all_resolved = false,
        }
    }

    if !lesson_ids.is_empty() && all_resolved {
        Quote::valid(price, list_price)
    } else {
        Quote::invalid(price, list_price)
    }
}
