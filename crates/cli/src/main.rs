//! Salescope CLI - Database migrations and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! salescope-cli migrate
//!
//! # Seed sales records from a YAML file
//! salescope-cli seed -f crates/cli/data/sales.yaml
//!
//! # Replace existing records instead of appending
//! salescope-cli seed -f crates/cli/data/sales.yaml --clear
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Insert sales records (the reporting API itself is read-only)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "salescope-cli")]
#[command(author, version, about = "Salescope CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed sales records from a YAML file
    Seed {
        /// Path to the YAML seed file
        #[arg(short, long)]
        file: String,

        /// Delete existing sales records before inserting
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, clear } => commands::seed::sales(&file, clear).await?,
    }
    Ok(())
}
