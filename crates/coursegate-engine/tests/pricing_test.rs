//! Subscription quote tests.

mod common;

use common::*;
use coursegate_core::types::{Quote, SubscriptionSelection};
use coursegate_core::{Money, NodeId, SectionId};
use coursegate_engine::quote;

fn sample() -> Vec<coursegate_core::types::Section> {
    curriculum(vec![
        (
            section("s1", 1),
            vec![
                lesson("l1", "s1", 1),
                lesson("l2", "s1", 2).priced(money(80), money(60)),
                exam("e1", "s1", 3).priced(money(30), money(30)),
            ],
        ),
        (
            section("s2", 2).priced(money(300), money(250)),
            vec![lesson("l3", "s2", 1).free().priced(Money::ZERO, Money::ZERO)],
        ),
    ])
}

fn custom(ids: &[&str]) -> SubscriptionSelection {
    SubscriptionSelection::Custom {
        lesson_ids: ids.iter().map(|id| NodeId::from(*id)).collect(),
    }
}

#[test]
fn course_scope_uses_final_price() {
    let q = quote(&SubscriptionSelection::Course, &course(), &sample());
    assert_eq!(q, Quote::valid(money(400), money(500)));
    assert_eq!(q.savings(), money(100));
}

#[test]
fn section_scope_uses_section_final_price() {
    let selection = SubscriptionSelection::Section {
        section_id: SectionId::from("s2"),
    };
    let q = quote(&selection, &course(), &sample());
    assert!(q.is_valid);
    assert_eq!(q.price, money(250));
    assert_eq!(q.list_price, money(300));
}

#[test]
fn unknown_section_is_invalid_and_free() {
    let selection = SubscriptionSelection::Section {
        section_id: SectionId::from("S9"),
    };
    let q = quote(&selection, &course(), &sample());
    assert_eq!(q.price, Money::ZERO);
    assert!(!q.is_valid);
}

#[test]
fn custom_scope_sums_lesson_final_prices() {
    let q = quote(&custom(&["l1", "l2"]), &course(), &sample());
    assert!(q.is_valid);
    assert_eq!(q.price, money(40 + 60));
    assert_eq!(q.list_price, money(50 + 80));
}

#[test]
fn custom_scope_empty_is_invalid() {
    let q = quote(&custom(&[]), &course(), &sample());
    assert!(!q.is_valid);
    assert_eq!(q.price, Money::ZERO);
}

#[test]
fn custom_scope_unknown_id_excluded_and_invalid() {
    let q = quote(&custom(&["l1", "nope"]), &course(), &sample());
    assert!(!q.is_valid);
    assert_eq!(q.price, money(40), "resolved lessons still summed");
}

#[test]
fn custom_scope_rejects_non_lesson_ids() {
    let q = quote(&custom(&["e1"]), &course(), &sample());
    assert!(!q.is_valid, "exams are never bought directly");
    assert_eq!(q.price, Money::ZERO);
}

#[test]
fn custom_scope_counts_duplicates_once() {
    let q = quote(&custom(&["l2", "l2"]), &course(), &sample());
    assert!(q.is_valid);
    assert_eq!(q.price, money(60));
}

#[test]
fn custom_scope_free_lesson_costs_nothing_but_is_valid() {
    let q = quote(&custom(&["l3"]), &course(), &sample());
    assert!(q.is_valid);
    assert_eq!(q.price, Money::ZERO);
}

#[test]
fn quotes_against_empty_curriculum() {
    assert!(quote(&SubscriptionSelection::Course, &course(), &[]).is_valid);
    assert!(!quote(&custom(&["l1"]), &course(), &[]).is_valid);
}

#[test]
fn selection_serializes_with_scope_tag() {
    let json = serde_json::to_string(&custom(&["l1"])).unwrap();
    assert_eq!(json, r#"{"scope":"custom","lessonIds":["l1"]}"#);
    let parsed: SubscriptionSelection =
        serde_json::from_str(r#"{"scope":"section","sectionId":"s1"}"#).unwrap();
    assert_eq!(
        parsed,
        SubscriptionSelection::Section {
            section_id: SectionId::from("s1")
        }
    );
    let course_scope: SubscriptionSelection = serde_json::from_str(r#"{"scope":"course"}"#).unwrap();
    assert_eq!(course_scope, SubscriptionSelection::Course);
}
