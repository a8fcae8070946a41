//! Attendee-scoped conflict detection.
//!
//! Two events conflict when both are `scheduled`, their intervals overlap
//! (half-open semantics) and they share at least one attendee. Cancelled and
//! completed events never block a booking.

use std::collections::HashSet;
use std::fmt;

use crate::event::{Event, EventStatus};
use crate::interval::TimeInterval;

/// One detected scheduling conflict against an existing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Title of the already-scheduled event.
    pub title: String,
    /// The attendees present on both sides, sorted for stable output.
    pub attendees: Vec<String>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conflict with event '{}' for attendees: {}",
            self.title,
            self.attendees.join(", ")
        )
    }
}

/// Scan existing events for conflicts against a candidate interval.
///
/// `exclude_id` skips the event currently being updated, if any. Returns all
/// conflicts in iteration order; an empty vec means the booking is clear.
pub fn find_conflicts<'a>(
    events: impl Iterator<Item = &'a Event>,
    exclude_id: Option<&str>,
    interval: &TimeInterval,
    attendees: &[String],
) -> Vec<Conflict> {
    let candidate: HashSet<&str> = attendees.iter().map(String::as_str).collect();

    events
        .filter(|event| exclude_id != Some(event.id.as_str()))
        .filter(|event| event.status == EventStatus::Scheduled)
        .filter(|event| {
            interval.overlaps(&TimeInterval {
                start: event.start_time,
                end: event.end_time,
            })
        })
        .filter_map(|event| {
            let mut shared: Vec<String> = event
                .attendees
                .iter()
                .filter(|a| candidate.contains(a.as_str()))
                .cloned()
                .collect();
            if shared.is_empty() {
                return None;
            }
            shared.sort();
            shared.dedup();
            Some(Conflict {
                title: event.title.clone(),
                attendees: shared,
            })
        })
        .collect()
}
