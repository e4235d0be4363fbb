//! Course view and progress summary tests.

mod common;

use common::*;
use coursegate_core::config::ProgressionConfig;
use coursegate_core::types::{Course, EntitlementSet};
use coursegate_core::NodeId;
use coursegate_engine::{CourseView, LockReason, LockState, ProgressSummary};

#[test]
fn view_carries_lock_states_and_counts() {
    let sections = curriculum(vec![
        (
            section("s1", 1),
            vec![
                lesson("l1", "s1", 1).free().mandatory().completed(),
                lesson("l2", "s1", 2).mandatory(),
                exam("e1", "s1", 3),
            ],
        ),
        (section("s2", 2), vec![lesson("l3", "s2", 1)]),
    ]);
    let owned = EntitlementSet::new().with_section("s1");
    let view = CourseView::build(course(), sections, &owned, &ProgressionConfig::default());

    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.lock_state(&NodeId::from("l2")), Some(LockState::Open));
    assert_eq!(
        view.lock_state(&NodeId::from("e1")),
        Some(LockState::Locked(LockReason::Sequence))
    );
    assert_eq!(
        view.lock_state(&NodeId::from("l3")),
        Some(LockState::Locked(LockReason::Commercial))
    );
    assert_eq!(view.lock_state(&NodeId::from("missing")), None);

    assert_eq!(
        view.progress,
        ProgressSummary {
            total: 4,
            completed: 1,
            open: 2,
            commercial_locked: 1,
            sequence_locked: 1,
        }
    );
    assert_eq!(view.progress.percent_complete(), 25);
    assert_eq!(view.continue_node().map(|n| n.node.id.as_str()), Some("l2"));
}

#[test]
fn continue_node_none_when_everything_done_or_locked() {
    let sections = curriculum(vec![(
        section("s1", 1),
        vec![lesson("l1", "s1", 1).free().completed(), lesson("l2", "s1", 2)],
    )]);
    let view = CourseView::build(course(), sections, &EntitlementSet::new(), &ProgressionConfig::default());
    assert!(view.continue_node().is_none());
}

#[test]
fn empty_course_view() {
    let view = CourseView::build(Course::new("c1"), vec![], &EntitlementSet::new(), &ProgressionConfig::default());
    assert_eq!(view.progress, ProgressSummary::default());
    assert_eq!(view.progress.percent_complete(), 0);
    assert!(view.continue_node().is_none());
}

#[test]
fn view_serializes_for_presentation() {
    let sections = curriculum(vec![(section("s1", 1), vec![lesson("l1", "s1", 1).free()])]);
    let view = CourseView::build(course(), sections, &EntitlementSet::new(), &ProgressionConfig::default());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["sections"][0]["nodes"][0]["lock"]["state"], "open");
    assert_eq!(json["progress"]["total"], 1);
}
