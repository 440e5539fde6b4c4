//! Batch analysis of a replays folder.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use sensfix_core::analysis::file_name_of;
use sensfix_core::report::format_replay_summary;
use sensfix_core::{
    AnalysisReport, Analyzer, Config, ReportFormat, SensitivityGroups, discover_replays,
};
use tracing::{info, warn};

use crate::cli_utils;
use crate::labels::SensitivityResolver;

pub fn run<R: BufRead, W: Write>(
    config: &Config,
    resolver: &mut SensitivityResolver<R, W>,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<()> {
    info!("Replays folder : {}", config.replays_dir.display());
    match config.dpi {
        Some(dpi) => info!("Mouse DPI      : {}", dpi),
        None => info!("Mouse DPI      : not provided (eDPI will not be shown)"),
    }

    let replays = discover_replays(&config.replays_dir)?;
    info!("Found {} replays", replays.len());

    let library = cli_utils::open_library(config)?;
    let analyzer = Analyzer::new(library, config.analysis_options());
    let groups = collect(&analyzer, &replays, resolver)?;

    if groups.is_empty() {
        warn!("No data analyzed. No sensitivity provided or no valid replays.");
        return Ok(());
    }

    let report = AnalysisReport::new(
        groups.reports(config.dpi),
        config.dpi,
        config.recommendation.min_hits,
    );
    cli_utils::write_output(output, &report.render(format)?)
}

/// Analyze every replay that gets a sensitivity and group the results.
///
/// Per-replay failures are logged and skipped.
pub fn collect<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    replays: &[impl AsRef<Path>],
    resolver: &mut SensitivityResolver<R, W>,
) -> Result<SensitivityGroups> {
    let mut groups = SensitivityGroups::new();

    for path in replays {
        let path = path.as_ref();
        let file_name = file_name_of(path);

        let Some(sens) = resolver.resolve(&file_name)? else {
            info!("Replay {} skipped (no sensitivity provided).", file_name);
            continue;
        };

        let analysis = match analyzer.analyze_path(path) {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Error loading {}: {}", file_name, e);
                continue;
            }
        };

        if analysis.errors.is_empty() {
            warn!("No errors computed for {}", file_name);
            continue;
        }

        info!("{} for sens {}", format_replay_summary(&analysis), sens);
        groups.extend(sens, analysis.errors);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensfix_core::{AnalysisOptions, BeatmapLibrary, SensitivityTable};

    use crate::prompter::Prompter;

    #[test]
    fn test_collect_skips_unlabeled_and_broken_replays() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken sens_1.0.osr");
        let unlabeled = dir.path().join("unlabeled.osr");
        std::fs::write(&broken, b"garbage").unwrap();
        std::fs::write(&unlabeled, b"garbage").unwrap();

        let analyzer = Analyzer::new(BeatmapLibrary::new(), AnalysisOptions::default());
        let mut resolver: SensitivityResolver<&[u8], Vec<u8>> =
            SensitivityResolver::new(None, SensitivityTable::new(), true, None);

        let groups = collect(&analyzer, &[broken, unlabeled], &mut resolver).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_collect_prompts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.osr");
        let second = dir.path().join("b.osr");
        std::fs::write(&first, b"garbage").unwrap();
        std::fs::write(&second, b"garbage").unwrap();

        let analyzer = Analyzer::new(BeatmapLibrary::new(), AnalysisOptions::default());
        let prompter = Prompter::new("\n0.9\n".as_bytes(), Vec::new());
        let mut resolver =
            SensitivityResolver::new(None, SensitivityTable::new(), false, Some(prompter));

        // Both are unreadable, but only the second one consumed a prompt answer
        let groups = collect(&analyzer, &[first, second], &mut resolver).unwrap();
        assert!(groups.is_empty());
        assert_eq!(resolver.resolve("c.osr").unwrap(), None);
    }
}
