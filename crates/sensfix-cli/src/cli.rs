//! CLI argument definitions for sensfix.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sensfix_core::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "sensfix")]
#[command(
    about = "Analyze osu! replays to compare aim accuracy for different mouse sensitivities",
    version
)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "SENSFIX_CONFIG")]
    pub config: PathBuf,

    /// Path to your osu! Songs folder
    #[arg(long, value_name = "DIR", env = "SENSFIX_SONGS")]
    pub songs: Option<PathBuf>,

    /// Folder containing the .osr replays to analyze
    #[arg(long, value_name = "DIR")]
    pub replays: Option<PathBuf>,

    /// Mouse DPI (same for all replays), used to compute eDPI
    #[arg(long)]
    pub dpi: Option<f64>,

    /// Maximum time distance in ms between a circle and its click
    #[arg(long, value_name = "MS")]
    pub window_ms: Option<f64>,

    /// Which frames count as a click
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// Use this sensitivity for every replay
    #[arg(long, value_name = "SENS")]
    pub sens: Option<f64>,

    /// Read the sensitivity from replay file names (e.g. "sens_0.85")
    #[arg(long)]
    pub sens_from_name: bool,

    /// Never ask for a sensitivity; replays without one are skipped
    #[arg(long)]
    pub no_prompt: bool,

    /// Minimum hitcircles for a sensitivity to be recommended
    #[arg(long)]
    pub min_hits: Option<usize>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every measured hit of a single replay
    Inspect {
        /// Replay file (.osr)
        replay: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchModeArg {
    /// Any frame with a key held
    Held,
    /// Only frames where a key goes down
    Press,
}
