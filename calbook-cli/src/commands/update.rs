//! Update an event, merging the provided flags over its current fields.
//!
//! The server's update is a full replacement, so the merge happens here: an
//! omitted flag means "keep the current value". In particular an omitted
//! `--attendees` keeps the existing attendee list, it does not clear it.

use anyhow::{Result, anyhow};
use owo_colors::OwoColorize;

use calbook_core::{EventDraft, EventStatus};

use crate::client::Client;
use crate::render;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    client: &Client,
    id: &str,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    location: Option<String>,
    organizer: Option<String>,
    attendees: Option<Vec<String>>,
    status: Option<String>,
) -> Result<()> {
    let current = client.get_event(id).await?;
    if current.is_not_found() {
        eprintln!("{}", format!("Event '{id}' not found").red());
        return Ok(());
    }

    let status = match status {
        Some(s) => Some(s.parse::<EventStatus>().map_err(|e| anyhow!(e))?),
        None => None,
    };

    let draft = EventDraft {
        title: title.unwrap_or(current.title),
        description: description.unwrap_or(current.description),
        location: location.unwrap_or(current.location),
        organizer: organizer.unwrap_or(current.organizer),
        start_time: start.unwrap_or(current.start_time),
        end_time: end.unwrap_or(current.end_time),
        attendees: attendees.unwrap_or(current.attendees),
        status,
    };

    let response = client.update_event(id, &draft).await?;
    render::print_outcome(&response);
    Ok(())
}
