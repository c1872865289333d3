use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spritediff::{ComparatorConfig, GameConfig, SpriteComparator, SpriteError};

#[derive(Debug, Parser)]
#[command(name = "spritediff")]
#[command(about = "Check that a character sprite stands out from an obstacle sprite", long_about = None)]
struct Cli {
    /// JSON file overriding the default thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate the sprites of a game payload and print the result as JSON
    Compare {
        /// Payload with `character`, `obstacle`, `goalType` and `goalValue`
        payload: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Sprite(#[from] SpriteError),
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns whether the pair passed.
fn run(cli: Cli) -> Result<bool, CliError> {
    let config = match &cli.config {
        Some(path) => ComparatorConfig::from_json(&read(path)?)?,
        None => ComparatorConfig::default(),
    };
    let comparator = SpriteComparator::new(config);

    match cli.command {
        Commands::Compare { payload } => {
            let game = GameConfig::from_json(&read(&payload)?)?;
            let result = game.validate(&comparator);
            let json = serde_json::to_string_pretty(&result).map_err(SpriteError::from)?;
            println!("{json}");
            Ok(result.valid)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
