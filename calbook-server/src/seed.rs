//! Sample data seeded at startup.

use calbook_core::protocol::format_timestamp;
use calbook_core::{EventDraft, EventStore};
use chrono::{Duration, Local};

/// Seed a couple of sample events so a fresh server has something to list.
pub fn seed_sample_events(store: &EventStore) {
    let now = Local::now().naive_local();

    let samples = [
        EventDraft {
            title: "Project sync".to_string(),
            description: "Review of current project progress".to_string(),
            location: "Conference room A".to_string(),
            organizer: "manager@company.com".to_string(),
            start_time: format_timestamp(now + Duration::hours(2)),
            end_time: format_timestamp(now + Duration::hours(3)),
            attendees: vec![
                "user1@company.com".to_string(),
                "user2@company.com".to_string(),
            ],
            status: None,
        },
        EventDraft {
            title: "New tooling workshop".to_string(),
            description: "Introduction to new development tooling".to_string(),
            location: "Training room B".to_string(),
            organizer: "trainer@company.com".to_string(),
            start_time: format_timestamp(now + Duration::days(1)),
            end_time: format_timestamp(now + Duration::days(1) + Duration::hours(3)),
            attendees: vec![
                "dev1@company.com".to_string(),
                "dev2@company.com".to_string(),
                "dev3@company.com".to_string(),
            ],
            status: None,
        },
    ];

    for draft in samples {
        match store.create(draft) {
            Ok(event) => tracing::info!(id = %event.id, title = %event.title, "seeded event"),
            Err(err) => tracing::warn!(error = %err, "skipping sample event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_inserts_two_events() {
        let store = EventStore::new();
        seed_sample_events(&store);
        assert_eq!(store.len(), 2);
    }
}
