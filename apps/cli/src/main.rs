mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

use bitsa_api_client::{BitsaApiClient, EventListQuery};
use bitsa_events::{EventBucket, Month};
use bitsa_http::ReqwestClient;

#[derive(Parser)]
#[command(name = "bitsa", about = "BITSA events from the terminal")]
struct Cli {
    #[arg(long, env = "BITSA_API_BASE_URL")]
    base_url: String,

    #[arg(long, env = "BITSA_API_TOKEN", default_value = "")]
    token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List events, with optional filtering and paging
    Events {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// "upcoming" or "past"
        #[arg(long)]
        status: Option<EventBucket>,
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// The next events on the calendar
    Upcoming {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Events that have already happened
    Past {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// One event in full
    Show { id: String },
    /// A month of events as a grid
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Images for one event, or the whole gallery when no id is given
    Gallery {
        event_id: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut http = ReqwestClient::new(cli.base_url);
    if !cli.token.is_empty() {
        http = http.with_bearer_token(cli.token);
    }
    let client = BitsaApiClient::new(http);

    match cli.command {
        Command::Events {
            page,
            limit,
            search,
            category,
            status,
            sort_by,
        } => {
            let query = EventListQuery {
                page,
                limit,
                search,
                category,
                status,
                sort_by,
            };
            let response = client.list_events(query).await?;
            render::event_list(&response);
        }
        Command::Upcoming { limit } => {
            let response = client.upcoming_events(limit).await?;
            render::event_lines(&response.data.events);
        }
        Command::Past { page, limit } => {
            let response = client.past_events(page, limit).await?;
            render::event_list(&response);
        }
        Command::Show { id } => {
            let event = client.get_event(&id).await?;
            render::event_detail(&event);
        }
        Command::Calendar { year, month } => {
            let today = chrono::Utc::now().date_naive();
            let current = Month::containing(today);
            let month = Month::new(year.unwrap_or(current.year), month.unwrap_or(current.month));
            // One big page so the grid sees the whole month.
            let query = EventListQuery {
                limit: Some(200),
                ..Default::default()
            };
            let response = client.list_events(query).await?;
            render::calendar(month, &response.data.events, today);
        }
        Command::Gallery {
            event_id,
            page,
            limit,
        } => {
            let response = match event_id {
                Some(id) => client.event_gallery(&id).await?,
                None => client.all_gallery(page, limit).await?,
            };
            render::gallery(&response);
        }
    }

    Ok(())
}
