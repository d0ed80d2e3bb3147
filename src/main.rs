use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rally_recommender::api::{self, state::AppState};
use rally_recommender::config::AppConfig;
use rally_recommender::models::{
    HistoryEntry, PlayerProfile, TournamentCandidate, TournamentFilters,
};
use rally_recommender::recommend::Recommender;
use rally_recommender::reports;
use rally_recommender::snapshot::{read_collection, read_document, read_optional_collection};

#[derive(Parser)]
#[command(name = "rally-recommender")]
#[command(about = "Tournament recommendations and field reports for badminton players")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank tournaments for a player
    Recommend {
        /// Player profile (JSON)
        #[arg(long)]
        player: PathBuf,

        /// Candidate tournaments (JSON array or JSONL)
        #[arg(long)]
        tournaments: PathBuf,

        /// Player's past tournaments (JSON array or JSONL)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Only tournaments in this city (exact match)
        #[arg(long)]
        city: Option<String>,

        /// Only tournaments with this format (exact match)
        #[arg(long)]
        format: Option<String>,

        /// Maximum entry fee
        #[arg(long)]
        max_entry_fee: Option<f64>,

        /// Only tournaments with open slots
        #[arg(long)]
        available_only: bool,

        /// Only tournaments starting in the next seven days
        #[arg(long)]
        this_week_only: bool,

        /// Max results (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Experience mix of a tournament's participants
    Diversity {
        /// Tournament (JSON)
        #[arg(long)]
        tournament: PathBuf,
    },

    /// Compare a player with a tournament's participants
    Compare {
        /// Player profile (JSON)
        #[arg(long)]
        player: PathBuf,

        /// Tournament (JSON)
        #[arg(long)]
        tournament: PathBuf,
    },

    /// Start the API server
    Serve {
        /// Bind address (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (default from config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(level, cli.json_logs);

    tracing::info!("Starting rally-recommender v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Recommend {
            player,
            tournaments,
            history,
            city,
            format,
            max_entry_fee,
            available_only,
            this_week_only,
            limit,
        } => {
            let player: PlayerProfile = read_document(&player)
                .with_context(|| format!("Failed to read player from {:?}", player))?;
            let tournaments: Vec<TournamentCandidate> = read_collection(&tournaments)
                .with_context(|| format!("Failed to read tournaments from {:?}", tournaments))?;
            let history: Vec<HistoryEntry> = read_optional_collection(history.as_deref())
                .context("Failed to read history")?;

            tracing::info!(
                "Loaded {} tournaments and {} history entries",
                tournaments.len(),
                history.len()
            );

            let filters = TournamentFilters {
                city,
                format,
                max_entry_fee,
                available_only,
                this_week_only,
            };

            let recommender = Recommender::new(config.scoring.weights);
            let mut ranked = recommender.recommend_filtered(
                Some(&player),
                &tournaments,
                &filters,
                &history,
                Local::now().date_naive(),
            );
            ranked.truncate(limit.unwrap_or(config.scoring.default_limit));

            print_json(&ranked)?;
        }
        Commands::Diversity { tournament } => {
            let tournament: TournamentCandidate = read_document(&tournament)
                .with_context(|| format!("Failed to read tournament from {:?}", tournament))?;

            print_json(&reports::diversity(&tournament))?;
        }
        Commands::Compare { player, tournament } => {
            let player: PlayerProfile = read_document(&player)
                .with_context(|| format!("Failed to read player from {:?}", player))?;
            let tournament: TournamentCandidate = read_document(&tournament)
                .with_context(|| format!("Failed to read tournament from {:?}", tournament))?;

            let comparison = reports::compare(&player, &tournament);
            if comparison.is_none() {
                tracing::warn!("Tournament has no participants to compare against");
            }
            print_json(&comparison)?;
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let app = api::build_router(AppState::from_config(&config));
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
