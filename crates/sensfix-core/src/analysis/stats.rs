//! Descriptive statistics over hit errors.

use serde::Serialize;

use super::measure::HitError;

/// Linear-interpolated percentile of an ascending slice.
///
/// `p` is a fraction in `[0, 1]`. Returns NaN for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (n - 1) as f64 * p.clamp(0.0, 1.0);
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            if lower == upper {
                sorted[lower]
            } else {
                sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
            }
        }
    }
}

/// Distance statistics. Every statistic is NaN when `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
}

impl ErrorSummary {
    pub fn from_distances(distances: &[f64]) -> Self {
        if distances.is_empty() {
            return Self {
                count: 0,
                mean: f64::NAN,
                median: f64::NAN,
                p95: f64::NAN,
            };
        }

        let mut sorted = distances.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        Self {
            count: n,
            mean: sorted.iter().sum::<f64>() / n as f64,
            median: percentile(&sorted, 0.5),
            p95: percentile(&sorted, 0.95),
        }
    }

    pub fn from_errors(errors: &[HitError]) -> Self {
        let distances: Vec<f64> = errors.iter().map(|e| e.distance).collect();
        Self::from_distances(&distances)
    }
}

/// Overshoot/undershoot bias over the hits that have an approach direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalSummary {
    pub samples: usize,
    /// Mean signed error along the movement; positive means overshooting.
    pub mean_along: f64,
    pub mean_across: f64,
    pub overshoot_ratio: f64,
    pub undershoot_ratio: f64,
}

impl DirectionalSummary {
    pub fn from_errors(errors: &[HitError]) -> Self {
        let pairs: Vec<(f64, f64)> = errors
            .iter()
            .filter_map(|e| Some((e.along?, e.across?)))
            .collect();

        if pairs.is_empty() {
            return Self {
                samples: 0,
                mean_along: f64::NAN,
                mean_across: f64::NAN,
                overshoot_ratio: f64::NAN,
                undershoot_ratio: f64::NAN,
            };
        }

        let n = pairs.len() as f64;
        let over = pairs.iter().filter(|(along, _)| *along > 0.0).count() as f64;
        let under = pairs.iter().filter(|(along, _)| *along < 0.0).count() as f64;

        Self {
            samples: pairs.len(),
            mean_along: pairs.iter().map(|(along, _)| along).sum::<f64>() / n,
            mean_across: pairs.iter().map(|(_, across)| across).sum::<f64>() / n,
            overshoot_ratio: over / n,
            undershoot_ratio: under / n,
        }
    }

    /// Short label for the dominant bias, if any.
    pub fn tendency(&self) -> &'static str {
        if self.samples == 0 {
            "-"
        } else if self.mean_along > 0.0 {
            "overshoot"
        } else if self.mean_along < 0.0 {
            "undershoot"
        } else {
            "neutral"
        }
    }
}
