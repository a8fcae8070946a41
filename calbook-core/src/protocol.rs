//! Wire records shared by the server and the CLI client.
//!
//! Timestamps travel as ISO-8601 local-naive strings
//! (`YYYY-MM-DDTHH:MM:SS[.ffffff]`), which sort lexicographically. Business
//! failures are carried as `success=false` responses, never transport faults.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Status string used only in Get responses to signal absence.
/// Never stored; see `EventStatus` for the persisted values.
pub const STATUS_NOT_FOUND: &str = "not_found";

/// Wire form of an event, all timestamps as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDetails {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub attendees: Vec<String>,
    pub organizer: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl EventDetails {
    /// The sentinel record returned by Get for an absent id: `not_found`
    /// status, all other fields empty.
    pub fn not_found(event_id: &str) -> EventDetails {
        EventDetails {
            event_id: event_id.to_string(),
            description: "Event not found".to_string(),
            status: STATUS_NOT_FOUND.to_string(),
            ..EventDetails::default()
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == STATUS_NOT_FOUND
    }
}

impl From<&Event> for EventDetails {
    fn from(event: &Event) -> EventDetails {
        EventDetails {
            event_id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: format_timestamp(event.start_time),
            end_time: format_timestamp(event.end_time),
            location: event.location.clone(),
            attendees: event.attendees.clone(),
            organizer: event.organizer.clone(),
            status: event.status.to_string(),
            created_at: format_timestamp(event.created_at),
            updated_at: format_timestamp(event.updated_at),
        }
    }
}

/// Response record for the mutating operations (Create/Update/Delete).
#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventDetails>,
}

impl EventResponse {
    pub fn ok(message: impl Into<String>, event: Option<EventDetails>) -> EventResponse {
        EventResponse {
            success: true,
            message: message.into(),
            event,
        }
    }

    pub fn err(message: impl Into<String>) -> EventResponse {
        EventResponse {
            success: false,
            message: message.into(),
            event: None,
        }
    }
}

/// Response record for List.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<EventDetails>,
    pub total_count: usize,
}

/// Optional filter dimensions for List. Absent fields are unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Render a timestamp in the wire format; the fractional part appears only
/// when the value carries sub-second precision.
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;

    #[test]
    fn test_format_timestamp_round_second() {
        let dt: NaiveDateTime = "2024-01-10T09:00:00".parse().unwrap();
        assert_eq!(format_timestamp(dt), "2024-01-10T09:00:00");
    }

    #[test]
    fn test_format_timestamp_keeps_fraction() {
        let dt: NaiveDateTime = "2024-01-10T09:00:00.250000".parse().unwrap();
        assert_eq!(format_timestamp(dt), "2024-01-10T09:00:00.250");
    }

    #[test]
    fn test_response_without_event_omits_the_field() {
        let response = EventResponse::err("Event not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], serde_json::json!(false));
        assert!(json.get("event").is_none());
    }

    #[test]
    fn test_not_found_sentinel_shape() {
        let details = EventDetails::not_found("event_missing");
        assert!(details.is_not_found());
        assert_eq!(details.event_id, "event_missing");
        assert!(details.title.is_empty());
        assert!(details.start_time.is_empty());
    }

    #[test]
    fn test_details_from_event() {
        let event = Event {
            id: "event_abc12345".to_string(),
            title: "Standup".to_string(),
            description: "Daily sync".to_string(),
            location: "Room A".to_string(),
            organizer: "manager@example.com".to_string(),
            start_time: "2024-01-10T09:00:00".parse().unwrap(),
            end_time: "2024-01-10T09:30:00".parse().unwrap(),
            attendees: vec!["a@x.com".to_string()],
            status: EventStatus::Scheduled,
            created_at: "2024-01-01T00:00:00".parse().unwrap(),
            updated_at: "2024-01-01T00:00:00".parse().unwrap(),
        };

        let details = EventDetails::from(&event);
        assert_eq!(details.event_id, "event_abc12345");
        assert_eq!(details.start_time, "2024-01-10T09:00:00");
        assert_eq!(details.status, "scheduled");
        assert!(!details.is_not_found());
    }
}
