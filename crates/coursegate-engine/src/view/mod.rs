//! Read-only per-page view joining the curriculum with its lock map.
//!
//! Presentation layers read lock state from here and never re-derive it.

pub mod course_view;
pub mod progress;

pub use course_view::{CourseView, NodeView, SectionView};
pub use progress::ProgressSummary;
