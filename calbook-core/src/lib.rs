//! Core types and logic for the calbook event service.
//!
//! This crate owns everything with non-trivial invariants:
//! - `Event` and related types for calendar events
//! - `EventStore`, the authoritative id → event map with atomic mutations
//! - interval validation and attendee-scoped conflict detection
//! - the listing filter
//! - `protocol` module for the wire records shared by server and CLI

pub mod conflict;
pub mod error;
pub mod event;
pub mod interval;
pub mod protocol;
pub mod query;
pub mod store;

pub use conflict::Conflict;
pub use error::{StoreError, StoreResult};
pub use event::{Event, EventDraft, EventStatus};
pub use interval::TimeInterval;
pub use query::EventFilter;
pub use store::EventStore;
