use anyhow::Result;

use calbook_core::EventDraft;

use crate::client::Client;
use crate::render;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    client: &Client,
    title: String,
    start: String,
    end: String,
    description: Option<String>,
    location: Option<String>,
    organizer: Option<String>,
    attendees: Vec<String>,
) -> Result<()> {
    let draft = EventDraft {
        title,
        description: description.unwrap_or_default(),
        location: location.unwrap_or_default(),
        organizer: organizer.unwrap_or_default(),
        start_time: start,
        end_time: end,
        attendees,
        status: None,
    };

    let response = client.create_event(&draft).await?;
    render::print_outcome(&response);
    Ok(())
}
