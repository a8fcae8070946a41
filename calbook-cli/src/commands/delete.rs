use anyhow::Result;

use crate::client::Client;
use crate::render;

pub async fn run(client: &Client, id: &str) -> Result<()> {
    let response = client.delete_event(id).await?;
    render::print_outcome(&response);
    Ok(())
}
