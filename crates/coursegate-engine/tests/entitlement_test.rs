//! Entitlement resolution and derivation tests.

use chrono::{Duration, TimeZone, Utc};

use coursegate_core::boundary::{SubscriptionRecord, SubscriptionStatus, SubscriptionTargetRecord};
use coursegate_core::config::EntitlementConfig;
use coursegate_core::types::{EntitlementSet, EntitlementTarget};
use coursegate_core::{CourseId, NodeId, SectionId};
use coursegate_engine::{derive_entitlements, is_entitled};

fn targets<'a>(
    course: &'a CourseId,
    section: &'a SectionId,
    lesson: &'a NodeId,
) -> [EntitlementTarget<'a>; 3] {
    [
        EntitlementTarget::Course { id: course },
        EntitlementTarget::Section {
            id: section,
            course_id: course,
        },
        EntitlementTarget::Lesson {
            id: lesson,
            section_id: section,
            course_id: course,
        },
    ]
}

#[test]
fn empty_set_owns_nothing() {
    let (c, s, l) = (CourseId::from("c1"), SectionId::from("s1"), NodeId::from("l1"));
    let empty = EntitlementSet::new();
    for target in targets(&c, &s, &l) {
        assert!(!is_entitled(&empty, target), "{} should be locked", target.kind());
    }
}

#[test]
fn course_ownership_covers_sections_and_lessons() {
    let (c, s, l) = (CourseId::from("c1"), SectionId::from("s1"), NodeId::from("l1"));
    let owned = EntitlementSet::new().with_course("c1");
    for target in targets(&c, &s, &l) {
        assert!(is_entitled(&owned, target));
    }
}

#[test]
fn section_ownership_covers_its_lessons_not_the_course() {
    let (c, s, l) = (CourseId::from("c1"), SectionId::from("s1"), NodeId::from("l1"));
    let owned = EntitlementSet::new().with_section("s1");
    let [course, section, lesson] = targets(&c, &s, &l);
    assert!(!is_entitled(&owned, course));
    assert!(is_entitled(&owned, section));
    assert!(is_entitled(&owned, lesson));

    let other = SectionId::from("s2");
    assert!(!is_entitled(
        &owned,
        EntitlementTarget::Lesson {
            id: &l,
            section_id: &other,
            course_id: &c,
        }
    ));
}

#[test]
fn lesson_ownership_is_narrow() {
    let (c, s, l) = (CourseId::from("c1"), SectionId::from("s1"), NodeId::from("l1"));
    let owned = EntitlementSet::new().with_lesson("l1");
    let [course, section, lesson] = targets(&c, &s, &l);
    assert!(!is_entitled(&owned, course));
    assert!(!is_entitled(&owned, section));
    assert!(is_entitled(&owned, lesson));
}

#[test]
fn other_course_grants_nothing() {
    let (c, s, l) = (CourseId::from("c1"), SectionId::from("s1"), NodeId::from("l1"));
    let owned = EntitlementSet::new().with_course("c2");
    for target in targets(&c, &s, &l) {
        assert!(!is_entitled(&owned, target));
    }
}

fn record(status: SubscriptionStatus, target: SubscriptionTargetRecord) -> SubscriptionRecord {
    SubscriptionRecord {
        id: "sub".to_string(),
        status,
        target,
        expires_at: None,
    }
}

#[test]
fn derive_collects_active_records_only() {
    let now = Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap();
    let mut expired_lessons = record(
        SubscriptionStatus::Active,
        SubscriptionTargetRecord::Lessons {
            lesson_ids: vec!["l9".to_string()],
        },
    );
    expired_lessons.expires_at = Some(now - Duration::days(2));

    let records = vec![
        record(
            SubscriptionStatus::Active,
            SubscriptionTargetRecord::Section {
                section_id: "s1".to_string(),
            },
        ),
        record(
            SubscriptionStatus::Active,
            SubscriptionTargetRecord::Lessons {
                lesson_ids: vec!["l1".to_string(), String::new(), "l2".to_string()],
            },
        ),
        record(
            SubscriptionStatus::Pending,
            SubscriptionTargetRecord::Course {
                course_id: "c1".to_string(),
            },
        ),
        record(
            SubscriptionStatus::Cancelled,
            SubscriptionTargetRecord::Section {
                section_id: "s2".to_string(),
            },
        ),
        record(
            SubscriptionStatus::Active,
            SubscriptionTargetRecord::Course {
                course_id: String::new(),
            },
        ),
        expired_lessons,
    ];

    let set = derive_entitlements(&records, now, &EntitlementConfig::default());
    assert!(set.course_ids.is_empty());
    assert_eq!(set.section_ids.len(), 1);
    assert!(set.section_ids.contains(&SectionId::from("s1")));
    assert_eq!(set.lesson_ids.len(), 2);
    assert!(set.lesson_ids.contains(&NodeId::from("l1")));
    assert!(set.lesson_ids.contains(&NodeId::from("l2")));
    assert!(!set.lesson_ids.contains(&NodeId::from("l9")));
}

#[test]
fn derive_honours_expiry_grace() {
    let now = Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap();
    let mut rec = record(
        SubscriptionStatus::Active,
        SubscriptionTargetRecord::Course {
            course_id: "c1".to_string(),
        },
    );
    rec.expires_at = Some(now - Duration::hours(1));

    let strict = derive_entitlements(std::slice::from_ref(&rec), now, &EntitlementConfig::default());
    assert!(strict.is_empty());

    let lenient = derive_entitlements(
        &[rec],
        now,
        &EntitlementConfig {
            expiry_grace_secs: 2 * 3600,
        },
    );
    assert!(lenient.course_ids.contains(&CourseId::from("c1")));
}

#[test]
fn derive_from_no_records_is_empty() {
    let set = derive_entitlements(&[], Utc::now(), &EntitlementConfig::default());
    assert!(set.is_empty());
}
