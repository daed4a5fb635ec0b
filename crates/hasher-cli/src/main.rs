//! hasher - Entry Point
//!
//! Command-line front end over the `hasher` library.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hasher hash [--cost N]` | Hash the secret read from stdin |
//! | `hasher verify --hash H` | Check the candidate read from stdin against `H` |
//! | `hasher generate [--length N]` | Print a random secret |
//! | `hasher config` | Print the effective configuration |

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hasher::config::ConfigLoader;
use hasher::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for hasher
#[derive(Parser, Debug)]
#[command(name = "hasher")]
#[command(about = "Hash and verify passwords with bcrypt, generate random secrets")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hash the secret read from stdin
    ///
    /// The secret must be valid UTF-8 so it can later be checked with `verify`.
    Hash {
        /// bcrypt work factor (defaults to `hashing.cost`)
        #[arg(long)]
        cost: Option<u32>,
    },

    /// Verify the candidate read from stdin against an encoded hash
    ///
    /// Exits with status 0 on a match and 1 otherwise.
    Verify {
        /// Encoded bcrypt hash
        #[arg(long = "hash")]
        hashed: String,

        /// Report why verification failed
        #[arg(long)]
        explain: bool,
    },

    /// Print a random secret
    Generate {
        /// Number of characters (defaults to `generator.length`)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let (mut config, file_status) = loader
        .load_with_status()
        .context("Failed to load configuration")?;

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_logging(&config.logging).context("Failed to initialize logging")?;
    file_status.log();

    commands::run(cli.command, &config)
}
