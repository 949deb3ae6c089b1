//! Clears the store and repopulates it with superhero demo data.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin populate-db -- --seed 12345
//! ```
//!
//! Without `DATABASE_URL` (or `--database-url`) the data is written to an
//! in-memory store and only the summary is printed.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use octofit::config::Config;
use octofit::store;
use seed_data::db::Seeder;

#[derive(Debug, Parser)]
#[command(name = "populate-db", about = "Populate the OctoFit database with test data")]
struct Args {
    /// Seed for reproducible activity data
    #[arg(long)]
    seed: Option<u64>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::database_from_env()?;
    if let Some(url) = args.database_url.filter(|url| !url.trim().is_empty()) {
        config.database_url = Some(url);
    }

    let store = store::connect(&config).await?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = Seeder::new(store).populate(&mut rng).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Teams: {}", summary.teams);
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Activities: {}", summary.activities);
    tracing::info!("  Leaderboard entries: {}", summary.leaderboard);
    tracing::info!("  Workouts: {}", summary.workouts);

    Ok(())
}
