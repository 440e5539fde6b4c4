//! Inspect command: per-hit errors of one replay.

use std::path::Path;

use anyhow::{Context, Result};
use sensfix_core::report::format_hit_table;
use sensfix_core::{Analyzer, Config, ReportFormat};

use crate::cli_utils;

pub fn run(config: &Config, replay: &Path, format: ReportFormat, output: Option<&Path>) -> Result<()> {
    let library = cli_utils::open_library(config)?;
    let analyzer = Analyzer::new(library, config.analysis_options());

    let analysis = analyzer
        .analyze_path(replay)
        .with_context(|| format!("Error loading {}", replay.display()))?;

    let content = match format {
        ReportFormat::Table => format_hit_table(&analysis),
        ReportFormat::Json => serde_json::to_string_pretty(&analysis.errors)?,
        ReportFormat::Tsv => format_hits_tsv(&analysis.errors),
    };
    cli_utils::write_output(output, &content)
}

fn format_hits_tsv(errors: &[sensfix_core::HitError]) -> String {
    let mut lines = vec![
        "object\ttime\tdelta\ttarget_x\ttarget_y\tcursor_x\tcursor_y\tdistance\talong\tacross"
            .to_string(),
    ];
    let opt = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());
    for e in errors {
        lines.push(format!(
            "{}\t{:.0}\t{:.0}\t{:.1}\t{:.1}\t{:.1}\t{:.1}\t{:.2}\t{}\t{}",
            e.object_index,
            e.target_time_ms,
            e.time_delta_ms,
            e.target.x,
            e.target.y,
            e.cursor.x,
            e.cursor.y,
            e.distance,
            opt(e.along),
            opt(e.across)
        ));
    }
    lines.join("\n")
}
