//! lightbnb CLI - LightBnB database access from the terminal
//!
//! Every subcommand maps to one `lightbnb-db` operation and prints its
//! result as JSON on stdout:
//! - `migrate`: create tables and indexes
//! - `user`: look up or add users
//! - `reservations`: a guest's reservations
//! - `properties`: search, show and add listings

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{create_pool, DatabaseConfig};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and update the LightBnB database",
    long_about = "Look up users, list reservations, search and add property listings. \
                  Connection settings come from ~/.lightbnb/config.toml, .env and \
                  LIGHTBNB_DB_* / DATABASE_URL environment variables."
)]
struct Cli {
    /// Config file (default: ~/.lightbnb/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "LIGHTBNB_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging (prints generated SQL)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create tables and indexes (safe to re-run)
    Migrate,
    /// Look up or add users
    User(commands::users::UserArgs),
    /// List a guest's reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Search, show or add property listings
    Properties(commands::properties::PropertiesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let config = DatabaseConfig::load(cli.config.as_deref())
        .context("failed to load database configuration")?;
    tracing::debug!(?config, "database configuration");

    let pool = create_pool(&config)
        .await
        .context("failed to connect to database")?;

    let result = match cli.command {
        Commands::Migrate => commands::migrate::run(&pool).await,
        Commands::User(args) => commands::users::run(&pool, args).await,
        Commands::Reservations(args) => commands::reservations::run(&pool, args).await,
        Commands::Properties(args) => commands::properties::run(&pool, args).await,
    };

    pool.close().await;
    result
}
