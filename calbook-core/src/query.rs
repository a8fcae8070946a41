//! Listing filter for events.
//!
//! All supplied fields combine with logical AND; an absent field leaves that
//! dimension unconstrained. Date bounds are inclusive and compare the event's
//! start DATE only (the time component is discarded).

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::Event;

/// Filter for `EventStore::list`.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub organizer: Option<String>,
    /// Compared as the raw wire string, so an unknown status matches nothing.
    pub status: Option<String>,
}

impl EventFilter {
    /// Build a filter from optional wire strings.
    ///
    /// Date strings accept `YYYY-MM-DD` or a full datetime (the date part is
    /// used). An unparseable date leaves that bound unconstrained; List has
    /// no error path in the contract. Empty strings mean "not supplied".
    pub fn from_parts(
        start_date: Option<&str>,
        end_date: Option<&str>,
        organizer: Option<&str>,
        status: Option<&str>,
    ) -> EventFilter {
        EventFilter {
            start_date: start_date.and_then(parse_date),
            end_date: end_date.and_then(parse_date),
            organizer: non_empty(organizer),
            status: non_empty(status),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        let event_date = event.start_time.date();

        if let Some(from) = self.start_date {
            if event_date < from {
                return false;
            }
        }
        if let Some(to) = self.end_date {
            if event_date > to {
                return false;
            }
        }
        if let Some(organizer) = &self.organizer {
            if event.organizer != *organizer {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if event.status.as_str() != status {
                return false;
            }
        }

        true
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    s.parse::<NaiveDate>()
        .ok()
        .or_else(|| s.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}
