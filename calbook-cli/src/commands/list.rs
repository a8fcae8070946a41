use anyhow::Result;
use owo_colors::OwoColorize;

use calbook_core::protocol::ListQuery;

use crate::client::Client;
use crate::render;

pub async fn run(
    client: &Client,
    from: Option<String>,
    to: Option<String>,
    organizer: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let query = ListQuery {
        start_date: from,
        end_date: to,
        organizer,
        status,
    };

    let list = client.list_events(&query).await?;

    if list.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut events = list.events;
    events.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    for event in &events {
        render::print_event_line(event);
    }
    println!();
    println!("{}", format!("{} event(s)", list.total_count).dimmed());

    Ok(())
}
