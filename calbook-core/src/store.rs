//! The authoritative event store.
//!
//! `EventStore` owns the id → event map. All mutations run inside one write
//! lock covering the validate → conflict-check → write sequence, so two
//! concurrent creates for the same attendees can never both pass the conflict
//! check. Reads take the read lock and see a consistent snapshot.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Local;
use uuid::Uuid;

use crate::conflict::find_conflicts;
use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventDraft, EventStatus};
use crate::interval::TimeInterval;
use crate::query::EventFilter;

/// Shared, thread-safe event repository.
///
/// Cheap to clone; all clones share the same underlying map.
#[derive(Clone, Default)]
pub struct EventStore {
    events: Arc<RwLock<HashMap<String, Event>>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new event from `draft`.
    ///
    /// Validates the interval, checks for conflicts against every scheduled
    /// event, assigns a fresh id and inserts with `created_at == updated_at`.
    /// New events are always `scheduled`; any status in the draft is ignored
    /// here and only honored by `update`.
    pub fn create(&self, draft: EventDraft) -> StoreResult<Event> {
        let interval = TimeInterval::parse(&draft.start_time, &draft.end_time)
            .ok_or(StoreError::InvalidInterval)?;

        let mut events = write_lock(&self.events);

        let conflicts = find_conflicts(events.values(), None, &interval, &draft.attendees);
        if !conflicts.is_empty() {
            return Err(StoreError::Conflicts(conflicts));
        }

        let id = generate_id(&events);
        let now = Local::now().naive_local();
        let event = Event {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            organizer: draft.organizer,
            start_time: interval.start,
            end_time: interval.end,
            attendees: draft.attendees,
            status: EventStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };

        events.insert(id, event.clone());
        Ok(event)
    }

    /// Look up an event by id. Never mutates.
    pub fn get(&self, id: &str) -> Option<Event> {
        read_lock(&self.events).get(id).cloned()
    }

    /// Replace all fields of an existing event except `id` and `created_at`.
    ///
    /// The conflict check excludes the event itself, so keeping an event in
    /// its own slot always passes. Status is preserved unless the draft sets
    /// one; `updated_at` is bumped to now.
    pub fn update(&self, id: &str, draft: EventDraft) -> StoreResult<Event> {
        let mut events = write_lock(&self.events);

        if !events.contains_key(id) {
            return Err(StoreError::NotFound);
        }

        let interval = TimeInterval::parse(&draft.start_time, &draft.end_time)
            .ok_or(StoreError::InvalidInterval)?;

        let conflicts = find_conflicts(events.values(), Some(id), &interval, &draft.attendees);
        if !conflicts.is_empty() {
            return Err(StoreError::Conflicts(conflicts));
        }

        // Checked above, the entry cannot be absent while we hold the lock.
        let event = events.get_mut(id).ok_or(StoreError::NotFound)?;
        event.title = draft.title;
        event.description = draft.description;
        event.location = draft.location;
        event.organizer = draft.organizer;
        event.start_time = interval.start;
        event.end_time = interval.end;
        event.attendees = draft.attendees;
        if let Some(status) = draft.status {
            event.status = status;
        }
        event.updated_at = Local::now().naive_local();

        Ok(event.clone())
    }

    /// Remove an event, returning its title for the confirmation message.
    pub fn delete(&self, id: &str) -> StoreResult<String> {
        let mut events = write_lock(&self.events);
        let event = events.remove(id).ok_or(StoreError::NotFound)?;
        Ok(event.title)
    }

    /// List all events matching `filter`, from one read snapshot.
    pub fn list(&self, filter: &EventFilter) -> Vec<Event> {
        read_lock(&self.events)
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        read_lock(&self.events).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate an id that is unique within the map, retrying on collision.
/// The caller holds the write lock, so uniqueness survives until insertion.
fn generate_id(events: &HashMap<String, Event>) -> String {
    loop {
        let id = format!("event_{}", &Uuid::new_v4().simple().to_string()[..8]);
        if !events.contains_key(&id) {
            return id;
        }
    }
}

// A poisoned lock only means another thread panicked mid-operation; the map
// itself is still usable, so recover the guard instead of propagating.
fn read_lock(lock: &RwLock<HashMap<String, Event>>) -> RwLockReadGuard<'_, HashMap<String, Event>> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock(
    lock: &RwLock<HashMap<String, Event>>,
) -> RwLockWriteGuard<'_, HashMap<String, Event>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
