//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use super::AnalysisReport;
use crate::analysis::{DirectionalSummary, HitError, ReplayAnalysis, SensitivityReport};

/// Format the per-sensitivity summary table and the recommendation line.
pub fn format_summary_table(report: &AnalysisReport) -> String {
    let mut output = String::new();
    let show_edpi = report.dpi.is_some();

    let _ = writeln!(
        output,
        "{}",
        "=== Sensitivity summary (error in osu! pixels) ===".bold()
    );

    let mut header = format!(
        "{:<8}{:>12}{:>9}{:>9}{:>9}",
        "Sens", "Hitcircles", "Mean", "Median", "P95"
    );
    if show_edpi {
        let _ = write!(header, "{:>9}", "eDPI");
    }
    let _ = write!(header, "  {}", "Bias");
    let _ = writeln!(output, "{}", header.dimmed());

    let recommended = report.recommendation.map(|r| r.sensitivity);
    for row in &report.sensitivities {
        let line = format_summary_row(row, show_edpi);
        if recommended == Some(row.sensitivity) {
            let _ = writeln!(output, "{}", line.green().bold());
        } else {
            let _ = writeln!(output, "{}", line);
        }
    }

    let _ = writeln!(output);
    match &report.recommendation {
        Some(rec) => {
            let edpi = rec
                .edpi
                .map(|e| format!(" (eDPI ≈ {:.1})", e))
                .unwrap_or_default();
            let _ = write!(
                output,
                ">>> 'Optimal' sensitivity (lowest P95 error): {}{}",
                rec.sensitivity.to_string().green().bold(),
                edpi
            );
        }
        None => {
            let _ = write!(
                output,
                "{}",
                "Could not determine an 'optimal' sensitivity (not enough data).".yellow()
            );
        }
    }

    output
}

fn format_summary_row(row: &SensitivityReport, show_edpi: bool) -> String {
    let mut line = format!(
        "{:<8}{:>12}{:>9.2}{:>9.2}{:>9.2}",
        row.sensitivity.to_string(),
        row.summary.count,
        row.summary.mean,
        row.summary.median,
        row.summary.p95
    );
    if show_edpi {
        match row.edpi {
            Some(edpi) => {
                let _ = write!(line, "{:>9.1}", edpi);
            }
            None => {
                let _ = write!(line, "{:>9}", "-");
            }
        }
    }
    let _ = write!(line, "  {}", format_bias(&row.direction));
    line
}

/// "+1.25 overshoot (over 60% / under 35%)"
pub fn format_bias(direction: &DirectionalSummary) -> String {
    if direction.samples == 0 {
        return "-".to_string();
    }
    format!(
        "{:+.2} {} (over {:.0}% / under {:.0}%)",
        direction.mean_along,
        direction.tendency(),
        direction.overshoot_ratio * 100.0,
        direction.undershoot_ratio * 100.0
    )
}

/// Per-hit listing of one replay.
pub fn format_hit_table(analysis: &ReplayAnalysis) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{} {}",
        analysis.file_name.bold(),
        format!("[{}]", analysis.beatmap.display_name()).dimmed()
    );
    if let Some(player) = &analysis.player {
        let _ = writeln!(output, "Player: {}", player);
    }

    let header = format!(
        "{:>6}{:>10}{:>8}{:>18}{:>18}{:>8}{:>8}{:>8}",
        "#", "Time", "Δt", "Target", "Cursor", "Dist", "Along", "Across"
    );
    let _ = writeln!(output, "{}", header.dimmed());

    for hit in &analysis.errors {
        let _ = writeln!(output, "{}", format_hit_row(hit));
    }

    let summary = crate::analysis::ErrorSummary::from_errors(&analysis.errors);
    let _ = write!(
        output,
        "{} hitcircles, mean {:.2}, median {:.2}, P95 {:.2}",
        summary.count, summary.mean, summary.median, summary.p95
    );

    output
}

fn format_hit_row(hit: &HitError) -> String {
    let opt = |value: Option<f64>| {
        value
            .map(|v| format!("{:+.2}", v))
            .unwrap_or_else(|| "-".to_string())
    };
    format!(
        "{:>6}{:>10.0}{:>+8.0}{:>18}{:>18}{:>8.2}{:>8}{:>8}",
        hit.object_index,
        hit.target_time_ms,
        hit.time_delta_ms,
        format!("({:.1}, {:.1})", hit.target.x, hit.target.y),
        format!("({:.1}, {:.1})", hit.cursor.x, hit.cursor.y),
        hit.distance,
        opt(hit.along),
        opt(hit.across)
    )
}

/// Simple per-replay summary for logging
pub fn format_replay_summary(analysis: &ReplayAnalysis) -> String {
    format!(
        "{}: {} hitcircles analyzed ({})",
        analysis.file_name,
        analysis.errors.len(),
        analysis.beatmap.display_name()
    )
}
