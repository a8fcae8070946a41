use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::render;

pub async fn run(client: &Client, id: &str) -> Result<()> {
    let event = client.get_event(id).await?;

    if event.is_not_found() {
        eprintln!("{}", format!("Event '{id}' not found").red());
        return Ok(());
    }

    render::print_event(&event);
    Ok(())
}
