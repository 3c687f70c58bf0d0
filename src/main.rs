use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorekeeper::config::Config;
use scorekeeper::db::Database;
use scorekeeper::models::GameStatus;
use scorekeeper::store::LeagueStore;
use scorekeeper::{api, render, standings};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "League standings: seasons, divisions, games, rankings and news")]
struct Cli {
    /// SQLite database file (overrides SCOREKEEPER_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// List seasons
    Seasons,
    /// Show a division's games
    Games {
        #[arg(short, long)]
        season: Option<String>,
        #[arg(short, long)]
        division: Option<String>,
        /// Only show games with this status (upcoming, live, final)
        #[arg(long)]
        status: Option<GameStatus>,
    },
    /// Show a division's standings
    Standings {
        #[arg(short, long)]
        season: Option<String>,
        #[arg(short, long)]
        division: Option<String>,
    },
    /// List each division's teams
    Teams,
    /// Show the news feed, latest first
    News,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "scorekeeper=debug,tower_http=debug".into()),
    );

    // stderr keeps table output on stdout clean
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_store(cli_db: Option<PathBuf>, config: &Config) -> anyhow::Result<LeagueStore<Database>> {
    let db = match cli_db.or_else(|| config.db_path.clone()) {
        Some(path) => Database::open(path)?,
        None => Database::open_default()?,
    };
    db.migrate()?;

    let store = LeagueStore::load(db, config.defaults.clone());
    for warning in store.load_warnings() {
        tracing::warn!("{}", warning);
    }
    Ok(store)
}

/// Resolve the season/division to show, defaulting to the configured ones.
fn selection(
    config: &Config,
    season: Option<String>,
    division: Option<String>,
) -> anyhow::Result<(String, String)> {
    let season = season.unwrap_or_else(|| config.defaults.season.clone());
    let division = match division {
        Some(division) => division,
        None => config
            .defaults
            .divisions
            .first()
            .cloned()
            .context("No default division configured")?,
    };
    Ok((season, division))
}

async fn serve(store: LeagueStore<Database>, config: Config, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting scorekeeper server on port {}", port);

    let app = api::create_router(store, config.admin);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("scorekeeper server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    let store = open_store(cli.db, &config)?;

    match cli.command {
        Some(Commands::Serve { port }) => serve(store, config, port).await?,
        None => serve(store, config, 3000).await?,
        Some(Commands::Seasons) => {
            for name in store.season_names() {
                println!("{}", name);
            }
        }
        Some(Commands::Games {
            season,
            division,
            status,
        }) => {
            let (season, division) = selection(&config, season, division)?;
            let games = store.games(&season, &division)?;
            println!("{} / {}", season, division);
            match status {
                Some(status) => print!("{}", render::render_games_with_status(games, status)),
                None => print!("{}", render::render_games(games)),
            }
        }
        Some(Commands::Standings { season, division }) => {
            let (season, division) = selection(&config, season, division)?;
            let records = store.standings(&season, &division)?;
            println!("{} / {}", season, division);
            print!("{}", render::render_standings(&standings::rank(records)));
        }
        Some(Commands::Teams) => {
            print!("{}", render::render_teams(store.team_registry()));
        }
        Some(Commands::News) => {
            print!("{}", render::render_news(store.news_latest_first()));
        }
    }

    Ok(())
}
