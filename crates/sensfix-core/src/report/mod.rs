//! Report formats for aggregated results.

mod console;

pub use console::*;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::{EnumString, IntoStaticStr};

use crate::analysis::{Recommendation, SensitivityReport, recommend};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

/// Everything a run produced, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub dpi: Option<f64>,
    pub sensitivities: Vec<SensitivityReport>,
    pub recommendation: Option<Recommendation>,
}

impl AnalysisReport {
    pub fn new(sensitivities: Vec<SensitivityReport>, dpi: Option<f64>, min_hits: usize) -> Self {
        let recommendation = recommend(&sensitivities, min_hits);
        Self {
            generated_at: Utc::now(),
            dpi,
            sensitivities,
            recommendation,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Table => Ok(format_summary_table(self)),
            ReportFormat::Tsv => Ok(format_tsv(self)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

pub fn format_tsv_header() -> String {
    [
        "sensitivity",
        "edpi",
        "replays",
        "hitcircles",
        "mean",
        "median",
        "p95",
        "directional",
        "mean_along",
        "mean_across",
        "overshoot",
        "undershoot",
    ]
    .join("\t")
}

pub fn format_tsv_row(report: &SensitivityReport) -> String {
    let values: Vec<String> = vec![
        format!("{:.3}", report.sensitivity.value()),
        report
            .edpi
            .map(|e| format!("{:.1}", e))
            .unwrap_or_else(|| "-".to_string()),
        report.replays.to_string(),
        report.summary.count.to_string(),
        format!("{:.2}", report.summary.mean),
        format!("{:.2}", report.summary.median),
        format!("{:.2}", report.summary.p95),
        report.direction.samples.to_string(),
        format!("{:.2}", report.direction.mean_along),
        format!("{:.2}", report.direction.mean_across),
        format!("{:.3}", report.direction.overshoot_ratio),
        format!("{:.3}", report.direction.undershoot_ratio),
    ];

    values.join("\t")
}

pub fn format_tsv(report: &AnalysisReport) -> String {
    let mut lines = vec![format_tsv_header()];
    lines.extend(report.sensitivities.iter().map(format_tsv_row));
    lines.join("\n")
}
