//! Calendar event types.
//!
//! `Event` is the stored record, owned exclusively by the `EventStore`.
//! `EventDraft` carries the caller-supplied fields of a create or update
//! request; the store validates its timestamps and assigns everything else.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scheduled calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique id, assigned at creation, immutable thereafter.
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Organizer identifier (e.g. an email address). Not conflict-scoped.
    pub organizer: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Attendee identifiers. Carried as a list but treated as a set for
    /// conflict detection; order is not significant.
    pub attendees: Vec<String>,
    pub status: EventStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Lifecycle status of a stored event.
///
/// The `not_found` sentinel seen in read responses is deliberately NOT a
/// variant here; absence is modeled at the protocol boundary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(EventStatus::Scheduled),
            "cancelled" => Ok(EventStatus::Cancelled),
            "completed" => Ok(EventStatus::Completed),
            other => Err(format!("Unknown event status '{other}'")),
        }
    }
}

/// Caller-supplied fields for creating or updating an event.
///
/// Timestamps stay as raw wire strings here; the store validates them as a
/// pair so that malformed input and inverted intervals are rejected
/// identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organizer: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Ignored on create (new events are always `scheduled`); `None` on
    /// update means "leave unchanged".
    #[serde(default)]
    pub status: Option<EventStatus>,
}
