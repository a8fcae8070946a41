//! Terminal rendering for events and responses.

use calbook_core::protocol::{EventDetails, EventResponse};
use owo_colors::OwoColorize;

/// Print the full event card, one field per line.
pub fn print_event(event: &EventDetails) {
    println!();
    println!("{}", event.title.bold());
    print_field("ID", &event.event_id);
    print_field("Description", &event.description);
    print_field("Start", &event.start_time);
    print_field("End", &event.end_time);
    print_field("Location", &event.location);
    print_field("Organizer", &event.organizer);
    print_field("Status", &event.status);
    let attendees = if event.attendees.is_empty() {
        "none".to_string()
    } else {
        event.attendees.join(", ")
    };
    print_field("Attendees", &attendees);
    print_field("Created", &event.created_at);
    print_field("Updated", &event.updated_at);
}

fn print_field(label: &str, value: &str) {
    println!("  {:<12} {}", format!("{label}:").dimmed(), value);
}

/// Print one line per event for list output.
pub fn print_event_line(event: &EventDetails) {
    let attendees = format!("({})", event.attendees.join(", "));
    println!(
        "  {}  {}  {} {}",
        event.start_time,
        event.title,
        event.status.dimmed(),
        attendees.dimmed()
    );
}

/// Print a mutation outcome: green on success, red on failure.
pub fn print_outcome(response: &EventResponse) {
    if response.success {
        println!("{}", response.message.green());
        if let Some(event) = &response.event {
            print_event(event);
        }
    } else {
        eprintln!("{}", response.message.red());
    }
}
