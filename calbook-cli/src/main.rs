mod client;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::{Client, DEFAULT_SERVER_URL};

#[derive(Parser)]
#[command(name = "calbook")]
#[command(about = "Manage calendar events on a calbook server")]
struct Cli {
    /// Server base URL
    #[arg(long, default_value = DEFAULT_SERVER_URL, global = true)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    Create {
        title: String,

        /// Start time (e.g. "2024-01-10T09:00:00")
        #[arg(short, long)]
        start: String,

        /// End time (e.g. "2024-01-10T09:30:00")
        #[arg(short, long)]
        end: String,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// Organizer (email)
        #[arg(short, long)]
        organizer: Option<String>,

        /// Attendees, comma-separated (e.g. "a@x.com,b@x.com")
        #[arg(short, long, value_delimiter = ',')]
        attendees: Vec<String>,
    },
    /// Show a single event
    Get { id: String },
    /// Update an event; omitted flags keep the current values
    Update {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        organizer: Option<String>,

        /// Attendees, comma-separated; replaces the full list when given
        #[arg(short, long, value_delimiter = ',')]
        attendees: Option<Vec<String>>,

        /// New status: scheduled, cancelled or completed
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// List events, optionally filtered
    List {
        /// Only events starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only events starting on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        #[arg(short, long)]
        organizer: Option<String>,

        /// scheduled, cancelled or completed
        #[arg(long)]
        status: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    match cli.command {
        Commands::Create {
            title,
            start,
            end,
            description,
            location,
            organizer,
            attendees,
        } => {
            commands::create::run(
                &client, title, start, end, description, location, organizer, attendees,
            )
            .await
        }
        Commands::Get { id } => commands::get::run(&client, &id).await,
        Commands::Update {
            id,
            title,
            start,
            end,
            description,
            location,
            organizer,
            attendees,
            status,
        } => {
            commands::update::run(
                &client, &id, title, start, end, description, location, organizer, attendees,
                status,
            )
            .await
        }
        Commands::Delete { id } => commands::delete::run(&client, &id).await,
        Commands::List {
            from,
            to,
            organizer,
            status,
        } => commands::list::run(&client, from, to, organizer, status).await,
    }
}
