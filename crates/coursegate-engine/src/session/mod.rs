//! Snapshot session for one student viewing one course.
//!
//! The three fetches (curriculum, entitlements, completion) resolve
//! independently. Each fetch is tagged with a generation; a response is kept
//! only if no newer fetch of the same resource has started since. Anything not
//! loaded yet reads as empty, so nothing opens early. Views are recomputed from
//! scratch on every read.

pub mod store;

pub use store::{CourseSession, FetchTicket, Resource, SnapshotPayload};
