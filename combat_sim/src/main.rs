//! combat_sim - Command-line driver for scripted encounters and sync checks

mod boss;
mod sync;

use clap::{Parser, Subcommand};
use combat_core::{BalanceConfig, ConfigError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "combat_sim", about = "Run combat core scenarios from the terminal")]
struct Cli {
    /// Balance configuration file
    #[arg(long, default_value = "combat_core/config/balance.toml")]
    balance: PathBuf,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scripted boss encounter: mech vs mech, then the pilot on foot
    Boss {
        /// Encounter script with scripted events
        #[arg(long, default_value = "combat_core/config/iron_awakening.toml")]
        script: PathBuf,

        /// Safety limit on player turns
        #[arg(long, default_value_t = 50)]
        turn_limit: u32,
    },
    /// Effective attack/defense of one vehicle across pilot sync levels
    Sync {
        #[arg(long, value_delimiter = ',', default_value = "1,11,21")]
        levels: Vec<i32>,
    },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("combat_core=info,combat_sim=info")),
        )
        .init();

    let cli = Cli::parse();

    let balance = match BalanceConfig::load(&cli.balance) {
        Ok(balance) => Arc::new(balance),
        Err(e) => {
            tracing::error!(path = %cli.balance.display(), "failed to load balance config: {e}");
            return Err(e.into());
        }
    };
    tracing::info!(path = %cli.balance.display(), "balance config loaded");

    match cli.command {
        Command::Boss { script, turn_limit } => {
            boss::run(balance, &script, cli.seed, turn_limit)?;
        }
        Command::Sync { levels } => sync::run(&balance, &levels),
    }

    Ok(())
}
