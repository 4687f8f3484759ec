mod display;
mod menu;

use std::path::PathBuf;

use clap::Parser;
use flightdeck_db::FlightsDb;
use miette::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "flightdeck")]
#[command(about = "Interactive report viewer for a flight-records database")]
#[command(version)]
struct Cli {
    /// Database file path
    #[arg(long, env = "FLIGHTDECK_DB", default_value = "data/flights.sqlite3")]
    db: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    miette::set_panic_hook();
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the menu.
    use tracing_subscriber::EnvFilter;
    let env_filter = if cli.debug {
        EnvFilter::new("flightdeck_db=debug,flightdeck_cli=debug,info")
    } else {
        EnvFilter::new("flightdeck_db=info,flightdeck_cli=info,warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let db = FlightsDb::open(&cli.db).await?;
    match db.stats().await {
        Ok(stats) => info!(
            "Loaded {} flights across {} airlines",
            stats.flight_count, stats.airline_count
        ),
        Err(e) => tracing::warn!("Could not read database stats: {}", e),
    }

    // Close the pool on both the normal and the error path before
    // surfacing the loop's outcome.
    let outcome = menu::run(&db).await;
    db.close().await;
    outcome
}
