//! Serper Mock
//!
//! Runs the mock search API server, or performs a one-off search through the
//! client and prints the JSON result.
//!
//! # Configuration
//! Set `SERPER_MOCK_MODE` / `SERPER_API_KEY` env vars or configure in
//! `~/.serper-mock/config.toml`

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use serper_mock::{Category, Config, MockServer, SearchOptions, SerperClient};

#[derive(Parser)]
#[command(name = "serper-mock")]
#[command(about = "Local stand-in for the Serper web search API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fixed RNG seed for reproducible responses
    #[arg(long, env = "SERPER_MOCK_SEED", global = true)]
    seed: Option<u64>,

    /// Increase verbosity (-v debug, -vv trace). Default is info.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the mock HTTP server
    Serve {
        /// Port to listen on (default: from config or 8080)
        #[arg(long, short)]
        port: Option<u16>,
        /// Interface to bind (default: from config or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
    },
    /// Run a single search and print the result as JSON
    Search {
        /// Search query
        query: String,
        /// Result category: search, images, videos, news or places
        #[arg(long = "type", short = 't', default_value = "search")]
        search_type: String,
        /// Number of results
        #[arg(long)]
        num: Option<u32>,
        /// Result page
        #[arg(long)]
        page: Option<u32>,
        /// Country code
        #[arg(long)]
        gl: Option<String>,
        /// Interface language
        #[arg(long)]
        hl: Option<String>,
        /// Call the real API instead of the local synthesizer
        #[arg(long)]
        live: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    serper_common::init_tracing("serper_mock", cli.verbose)?;

    let mut config = Config::load()?;
    if cli.seed.is_some() {
        config.synth.seed = cli.seed;
    }

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let server = MockServer::from_config(&config).await?;
            server.serve().await?;
        }
        Commands::Search {
            query,
            search_type,
            num,
            page,
            gl,
            hl,
            live,
        } => {
            if live {
                config.client.mock_mode = false;
            }

            let mut options = SearchOptions::new();
            options.num = num;
            options.page = page;
            options.gl = gl;
            options.hl = hl;

            let client = SerperClient::new(&config)?;
            let category = Category::parse(&search_type);
            let result = client.search_category(&query, options, category).await?;

            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
