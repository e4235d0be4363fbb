use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use coursegate_core::boundary::CurriculumSnapshot;
use coursegate_core::errors::SourceError;
use coursegate_core::traits::{CompletionSource, CurriculumSource, EntitlementSource};
use coursegate_core::types::{
    CompletionSet, EntitlementSet, EntitlementTarget, Quote, Section, SubscriptionSelection,
};
use coursegate_core::{CourseId, GateConfig, GateResult, Money, StudentId};

use crate::curriculum::assemble_snapshot;
use crate::entitlement::{derive_entitlements, is_entitled};
use crate::pricing::quote;
use crate::view::CourseView;

/// One of the independently fetched inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Curriculum,
    Entitlements,
    Completion,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Self::Curriculum, Self::Entitlements, Self::Completion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Curriculum => "curriculum",
            Self::Entitlements => "entitlements",
            Self::Completion => "completion",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Curriculum => 0,
            Self::Entitlements => 1,
            Self::Completion => 2,
        }
    }
}

/// Handle for an in-flight fetch. Only the newest ticket per resource can
/// deliver a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    resource: Resource,
    generation: u64,
}

impl FetchTicket {
    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A resolved fetch.
#[derive(Debug, Clone)]
pub enum SnapshotPayload {
    Curriculum(CurriculumSnapshot),
    Entitlements(EntitlementSet),
    Completion(CompletionSet),
}

impl SnapshotPayload {
    pub fn resource(&self) -> Resource {
        match self {
            Self::Curriculum(_) => Resource::Curriculum,
            Self::Entitlements(_) => Resource::Entitlements,
            Self::Completion(_) => Resource::Completion,
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    issued: [u64; 3],
    curriculum: Option<CurriculumSnapshot>,
    entitlements: Option<EntitlementSet>,
    completion: Option<CompletionSet>,
}

impl SessionState {
    fn clear(&mut self, resource: Resource) {
        match resource {
            Resource::Curriculum => self.curriculum = None,
            Resource::Entitlements => self.entitlements = None,
            Resource::Completion => self.completion = None,
        }
    }

    fn is_loaded(&self, resource: Resource) -> bool {
        match resource {
            Resource::Curriculum => self.curriculum.is_some(),
            Resource::Entitlements => self.entitlements.is_some(),
            Resource::Completion => self.completion.is_some(),
        }
    }
}

/// Latest snapshots for one student and one course.
pub struct CourseSession {
    course_id: CourseId,
    student_id: StudentId,
    config: GateConfig,
    state: RwLock<SessionState>,
}

impl CourseSession {
    pub fn new(course_id: CourseId, student_id: StudentId, config: GateConfig) -> Self {
        Self {
            course_id,
            student_id,
            config,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Start a fetch. Any earlier ticket for the same resource becomes stale.
    pub fn begin_fetch(&self, resource: Resource) -> FetchTicket {
        let mut state = self.write();
        let slot = &mut state.issued[resource.slot()];
        *slot += 1;
        FetchTicket {
            resource,
            generation: *slot,
        }
    }

    /// Deliver a fetch result. Returns `false` when the ticket was superseded,
    /// the payload is for a different resource, or the curriculum belongs to
    /// another course; the payload is dropped.
    pub fn complete_fetch(&self, ticket: FetchTicket, payload: SnapshotPayload) -> bool {
        if payload.resource() != ticket.resource {
            warn!(
                ticket = ticket.resource.as_str(),
                payload = payload.resource().as_str(),
                "Payload does not match fetch ticket"
            );
            return false;
        }
        if let SnapshotPayload::Curriculum(snapshot) = &payload {
            if snapshot.course.id != self.course_id {
                warn!(
                    course = %self.course_id,
                    received = %snapshot.course.id,
                    "Curriculum belongs to another course"
                );
                return false;
            }
        }

        let mut state = self.write();
        let current = state.issued[ticket.resource.slot()];
        if current != ticket.generation {
            debug!(
                resource = ticket.resource.as_str(),
                generation = ticket.generation,
                current,
                "Discarding superseded fetch result"
            );
            return false;
        }

        match payload {
            SnapshotPayload::Curriculum(s) => state.curriculum = Some(s),
            SnapshotPayload::Entitlements(s) => state.entitlements = Some(s),
            SnapshotPayload::Completion(s) => state.completion = Some(s),
        }
        true
    }

    /// Drop the held snapshot and supersede any in-flight fetch.
    /// Called after a purchase or a submission changes upstream state.
    pub fn invalidate(&self, resource: Resource) {
        let mut state = self.write();
        state.issued[resource.slot()] += 1;
        state.clear(resource);
        info!(
            course = %self.course_id,
            student = %self.student_id,
            resource = resource.as_str(),
            "Snapshot invalidated"
        );
    }

    pub fn is_loaded(&self, resource: Resource) -> bool {
        self.read().is_loaded(resource)
    }

    /// Current entitlements; empty until loaded.
    pub fn entitlements(&self) -> EntitlementSet {
        self.read().entitlements.clone().unwrap_or_default()
    }

    /// Full view from the current snapshots. `None` until the curriculum is
    /// loaded; missing entitlements or completion read as empty.
    pub fn view(&self) -> Option<CourseView> {
        let (snapshot, entitlements, completion) = {
            let state = self.read();
            (
                state.curriculum.clone()?,
                state.entitlements.clone().unwrap_or_default(),
                state.completion.clone().unwrap_or_default(),
            )
        };
        let course = snapshot.course.clone();
        let sections = self.assemble(snapshot, &completion);
        Some(CourseView::build(
            course,
            sections,
            &entitlements,
            &self.config.progression,
        ))
    }

    /// Price a selection against the current curriculum. Invalid until the
    /// curriculum is loaded.
    pub fn quote(&self, selection: &SubscriptionSelection) -> Quote {
        let Some(snapshot) = self.read().curriculum.clone() else {
            return Quote::invalid(Money::ZERO, Money::ZERO);
        };
        let course = snapshot.course.clone();
        let sections = self.assemble(snapshot, &CompletionSet::new());
        quote(selection, &course, &sections)
    }

    /// Whether the current entitlements already cover the whole selection.
    pub fn owns(&self, selection: &SubscriptionSelection) -> bool {
        let state = self.read();
        let Some(entitlements) = state.entitlements.as_ref() else {
            return false;
        };
        match selection {
            SubscriptionSelection::Course => is_entitled(
                entitlements,
                EntitlementTarget::Course {
                    id: &self.course_id,
                },
            ),
            SubscriptionSelection::Section { section_id } => is_entitled(
                entitlements,
                EntitlementTarget::Section {
                    id: section_id,
                    course_id: &self.course_id,
                },
            ),
            SubscriptionSelection::Custom { lesson_ids } => {
                let Some(snapshot) = state.curriculum.as_ref() else {
                    return false;
                };
                !lesson_ids.is_empty()
                    && lesson_ids.iter().all(|id| {
                        snapshot.lessons.iter().find(|l| &l.id == id).is_some_and(|l| {
                            is_entitled(
                                entitlements,
                                EntitlementTarget::Lesson {
                                    id,
                                    section_id: &l.section_id,
                                    course_id: &self.course_id,
                                },
                            )
                        })
                    })
            }
        }
    }

    /// Fetch, validate and store the curriculum.
    pub fn refresh_curriculum(&self, source: &dyn CurriculumSource) -> GateResult<bool> {
        let ticket = self.begin_fetch(Resource::Curriculum);
        let records = source.fetch_curriculum(&self.course_id)?;
        let snapshot = records.into_snapshot().inspect_err(|e| {
            warn!(course = %self.course_id, error = %e, "Rejected curriculum records");
        })?;
        if snapshot.course.id != self.course_id {
            warn!(
                course = %self.course_id,
                received = %snapshot.course.id,
                "Rejected curriculum for another course"
            );
            return Err(SourceError::Mismatch {
                resource: "curriculum",
                expected: self.course_id.to_string(),
                actual: snapshot.course.id.to_string(),
            }
            .into());
        }
        Ok(self.complete_fetch(ticket, SnapshotPayload::Curriculum(snapshot)))
    }

    /// Fetch subscriptions and derive the entitlements in force at `now`.
    pub fn refresh_entitlements(
        &self,
        source: &dyn EntitlementSource,
        now: DateTime<Utc>,
    ) -> GateResult<bool> {
        let ticket = self.begin_fetch(Resource::Entitlements);
        let records = source.fetch_subscriptions(&self.student_id)?;
        let set = derive_entitlements(&records, now, &self.config.entitlement);
        Ok(self.complete_fetch(ticket, SnapshotPayload::Entitlements(set)))
    }

    pub fn refresh_completion(&self, source: &dyn CompletionSource) -> GateResult<bool> {
        let ticket = self.begin_fetch(Resource::Completion);
        let records = source.fetch_completion(&self.student_id, &self.course_id)?;
        let set = CompletionSet::from_records(&records);
        Ok(self.complete_fetch(ticket, SnapshotPayload::Completion(set)))
    }

    fn assemble(&self, mut snapshot: CurriculumSnapshot, completion: &CompletionSet) -> Vec<Section> {
        completion.apply(snapshot.nodes_mut());
        assemble_snapshot(snapshot, &self.config.progression.kind_priority)
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
