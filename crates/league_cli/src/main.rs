//! League CLI
//!
//! Create a league file, then advance it season by season.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Create and advance football league snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new league file
    New {
        /// Number of teams
        #[arg(long, default_value = "32")]
        teams: usize,

        /// First season
        #[arg(long, default_value = "2024")]
        year: u16,

        /// Generator seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Simulate the regular season and playoffs too
        #[arg(long, default_value = "false")]
        played: bool,

        /// Output league JSON path
        #[arg(long)]
        out: PathBuf,
    },

    /// Advance a league file through season transitions
    Advance {
        /// Input league JSON path
        #[arg(long)]
        r#in: PathBuf,

        /// Output league JSON path
        #[arg(long)]
        out: PathBuf,

        /// Transition seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of seasons to advance
        #[arg(long, default_value = "1")]
        seasons: u32,

        /// League config JSON (falls back to LEAGUE_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New { teams, year, seed, played, out } => {
            let digest = league_cli::new_league(&out, teams, year, seed, played)?;
            println!("Created {}-team league for {} at {}", teams, year, out.display());
            println!("   Digest: {}", digest);
        }

        Commands::Advance { r#in, out, seed, seasons, config } => {
            let summary = league_cli::advance_league(&r#in, &out, seed, seasons, config.as_deref())?;
            for report in &summary.reports {
                println!(
                    "{} -> {}: champion {}, {} retired, {} contracts expired, {} prospects, {} games",
                    report.from_year,
                    report.to_year,
                    if report.champion_team_id.is_empty() { "-" } else { report.champion_team_id.as_str() },
                    report.retired_player_ids.len(),
                    report.expired_contract_ids.len(),
                    report.prospects_generated,
                    report.games_scheduled
                );
            }
            println!("Wrote {}", out.display());
            println!("   Digest: {}", summary.digest);
        }
    }

    Ok(())
}
