//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use sensfix_core::{BeatmapLibrary, Config, MatchMode, ReportFormat};
use tracing::{info, warn};

use crate::cli::{Args, MatchModeArg, OutputFormat};

/// Load the config file, falling back to defaults when it is missing, then
/// apply CLI overrides.
pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = read_config_file(&args.config)?;

    if let Some(songs) = &args.songs {
        config.songs_dir = songs.clone();
    }
    if let Some(replays) = &args.replays {
        config.replays_dir = replays.clone();
    }
    if let Some(dpi) = args.dpi {
        config.dpi = Some(dpi);
    }
    if let Some(window_ms) = args.window_ms {
        config.matching.window_ms = window_ms;
    }
    if let Some(mode) = args.match_mode {
        config.matching.mode = match mode {
            MatchModeArg::Held => MatchMode::Held,
            MatchModeArg::Press => MatchMode::Press,
        };
    }
    if let Some(min_hits) = args.min_hits {
        config.recommendation.min_hits = min_hits;
    }

    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn report_format(format: OutputFormat) -> ReportFormat {
    match format {
        OutputFormat::Table => ReportFormat::Table,
        OutputFormat::Tsv => ReportFormat::Tsv,
        OutputFormat::Json => ReportFormat::Json,
    }
}

pub fn open_library(config: &Config) -> Result<BeatmapLibrary> {
    info!("Songs folder   : {}", config.songs_dir.display());
    let library = BeatmapLibrary::scan(&config.songs_dir)?;
    if library.is_empty() {
        warn!("No beatmaps found in {}", config.songs_dir.display());
    }
    Ok(library)
}

/// Write to `output` if given, stdout otherwise.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("Report written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
