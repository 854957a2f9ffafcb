use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wifi_dash_client::{ApiClient, ClientConfig};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "wifi-dash")]
#[command(about = "Household Wi-Fi quality dashboard", long_about = None)]
struct Cli {
    /// Telemetry API base URL [env: WIFI_DASH_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// HTTP timeout in seconds [env: WIFI_DASH_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered houses
    Houses,
    /// Show stat cards and the signal table for one page
    Dashboard {
        /// House to filter on (all houses when omitted)
        #[arg(long)]
        house: Option<String>,
        /// Page to show; earlier pages are walked to resolve its cursor
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        #[arg(long)]
        json: bool,
    },
    /// Page through signals interactively (commands on stdin)
    Browse {
        #[arg(long)]
        house: Option<String>,
    },
    /// Per-room scorecards and recommendations of a house
    House {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&client_config(&cli))?;
    tracing::debug!(base_url = client.base_url(), "api client ready");

    match cli.command {
        Commands::Houses => commands::houses::run(&client).await,
        Commands::Dashboard { house, page, json } => {
            commands::dashboard::run(client, house, usize::try_from(page)?, json).await
        },
        Commands::Browse { house } => commands::browse::run(client, house).await,
        Commands::House { id, json } => commands::house::run(&client, &id, json).await,
    }
}
