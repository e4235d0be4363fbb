//! Ownership checks. Fail-closed: an empty set owns nothing.

use coursegate_core::types::{ContentKind, ContentNode, EntitlementSet, EntitlementTarget};
use coursegate_core::CourseId;

/// Whether `target` is owned, directly or through a containing scope.
///
/// A section is owned through its course; a lesson through its section or course.
pub fn is_entitled(entitlements: &EntitlementSet, target: EntitlementTarget<'_>) -> bool {
    match target {
        EntitlementTarget::Course { id } => entitlements.course_ids.contains(id),
        EntitlementTarget::Section { id, course_id } => {
            entitlements.section_ids.contains(id) || entitlements.course_ids.contains(course_id)
        }
        EntitlementTarget::Lesson {
            id,
            section_id,
            course_id,
        } => {
            entitlements.lesson_ids.contains(id)
                || is_entitled(
                    entitlements,
                    EntitlementTarget::Section {
                        id: section_id,
                        course_id,
                    },
                )
        }
    }
}

/// The scope a node's access derives from.
///
/// Lessons are their own target. Exams and homework are never bought on their
/// own: they resolve through their parent lesson when attached to one, else
/// through their section.
pub fn node_target<'a>(node: &'a ContentNode, course_id: &'a CourseId) -> EntitlementTarget<'a> {
    match (node.kind, node.lesson_id.as_ref()) {
        (ContentKind::Lesson, _) => EntitlementTarget::Lesson {
            id: &node.id,
            section_id: &node.section_id,
            course_id,
        },
        (_, Some(lesson_id)) => EntitlementTarget::Lesson {
            id: lesson_id,
            section_id: &node.section_id,
            course_id,
        },
        (_, None) => EntitlementTarget::Section {
            id: &node.section_id,
            course_id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegate_core::{NodeId, SectionId};

    #[test]
    fn test_exam_without_lesson_resolves_through_section() {
        let course = CourseId::from("c1");
        let exam = ContentNode::new("e1", ContentKind::Exam, "s1", 1);
        let target = node_target(&exam, &course);
        assert_eq!(target.kind(), "section");

        let owned = EntitlementSet::new().with_section("s1");
        assert!(is_entitled(&owned, target));
    }

    #[test]
    fn test_homework_under_lesson_resolves_through_lesson() {
        let course = CourseId::from("c1");
        let hw = ContentNode::new("h1", ContentKind::Homework, "s1", 1).under_lesson("l1");
        let target = node_target(&hw, &course);
        assert_eq!(
            target,
            EntitlementTarget::Lesson {
                id: &NodeId::from("l1"),
                section_id: &SectionId::from("s1"),
                course_id: &course,
            }
        );
        assert!(is_entitled(&EntitlementSet::new().with_lesson("l1"), target));
        assert!(!is_entitled(&EntitlementSet::new().with_lesson("h1"), target));
    }
}
