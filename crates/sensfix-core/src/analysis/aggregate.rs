//! Grouping of hit errors by sensitivity, and the recommendation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::measure::HitError;
use super::stats::{DirectionalSummary, ErrorSummary};
use crate::sensitivity::Sensitivity;

#[derive(Debug, Clone, Serialize)]
pub struct SensitivityReport {
    pub sensitivity: Sensitivity,
    pub edpi: Option<f64>,
    pub replays: usize,
    pub summary: ErrorSummary,
    pub direction: DirectionalSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub sensitivity: Sensitivity,
    pub edpi: Option<f64>,
    pub p95: f64,
}

#[derive(Debug, Default)]
struct Group {
    replays: usize,
    errors: Vec<HitError>,
}

/// Hit errors keyed by sensitivity, in ascending order.
#[derive(Debug, Default)]
pub struct SensitivityGroups {
    groups: BTreeMap<Sensitivity, Group>,
}

impl SensitivityGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one replay's errors under `sensitivity`.
    pub fn extend(&mut self, sensitivity: Sensitivity, errors: impl IntoIterator<Item = HitError>) {
        let group = self.groups.entry(sensitivity).or_default();
        group.replays += 1;
        group.errors.extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// One report per sensitivity, ascending.
    pub fn reports(&self, dpi: Option<f64>) -> Vec<SensitivityReport> {
        self.groups
            .iter()
            .map(|(&sensitivity, group)| SensitivityReport {
                sensitivity,
                edpi: dpi.map(|dpi| sensitivity.edpi(dpi)),
                replays: group.replays,
                summary: ErrorSummary::from_errors(&group.errors),
                direction: DirectionalSummary::from_errors(&group.errors),
            })
            .collect()
    }
}

/// Pick the sensitivity with the lowest P95 error.
///
/// Groups with fewer than `min_hits` samples or a NaN P95 are not eligible.
/// On equal P95 the earlier (lower) sensitivity wins.
pub fn recommend(reports: &[SensitivityReport], min_hits: usize) -> Option<Recommendation> {
    let mut best: Option<&SensitivityReport> = None;
    for report in reports {
        if report.summary.p95.is_nan() || report.summary.count < min_hits {
            continue;
        }
        if best.is_none_or(|b| report.summary.p95 < b.summary.p95) {
            best = Some(report);
        }
    }

    best.map(|report| Recommendation {
        sensitivity: report.sensitivity,
        edpi: report.edpi,
        p95: report.summary.p95,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    fn sens(value: f64) -> Sensitivity {
        Sensitivity::new(value).unwrap()
    }

    fn errors(distances: &[f64]) -> Vec<HitError> {
        distances
            .iter()
            .enumerate()
            .map(|(i, &distance)| HitError {
                object_index: i,
                target_time_ms: 0.0,
                target: Vec2::default(),
                cursor: Vec2::default(),
                time_delta_ms: 0.0,
                distance,
                along: None,
                across: None,
            })
            .collect()
    }

    #[test]
    fn test_groups_merge_same_sensitivity() {
        let mut groups = SensitivityGroups::new();
        groups.extend(sens(1.0), errors(&[1.0, 2.0]));
        groups.extend(sens(0.8), errors(&[5.0]));
        groups.extend(sens(1.0), errors(&[3.0]));

        assert_eq!(groups.len(), 2);

        let reports = groups.reports(Some(800.0));
        assert_eq!(reports[0].sensitivity, sens(0.8));
        assert_eq!(reports[0].edpi, Some(640.0));
        assert_eq!(reports[1].replays, 2);
        assert_eq!(reports[1].summary.count, 3);
        assert_eq!(reports[1].summary.mean, 2.0);
    }

    #[test]
    fn test_reports_without_dpi() {
        let mut groups = SensitivityGroups::new();
        groups.extend(sens(1.0), errors(&[1.0]));
        assert!(groups.reports(None)[0].edpi.is_none());
    }

    #[test]
    fn test_recommend_lowest_p95() {
        let mut groups = SensitivityGroups::new();
        groups.extend(sens(0.8), errors(&[10.0, 20.0]));
        groups.extend(sens(1.0), errors(&[2.0, 4.0]));
        groups.extend(sens(1.2), errors(&[6.0, 8.0]));

        let rec = recommend(&groups.reports(Some(400.0)), 1).unwrap();
        assert_eq!(rec.sensitivity, sens(1.0));
        assert_eq!(rec.edpi, Some(400.0));
        assert!((rec.p95 - 3.9).abs() < 1e-12);
    }

    #[test]
    fn test_recommend_tie_prefers_lower_sensitivity() {
        let mut groups = SensitivityGroups::new();
        groups.extend(sens(1.5), errors(&[3.0]));
        groups.extend(sens(0.5), errors(&[3.0]));
        let rec = recommend(&groups.reports(None), 1).unwrap();
        assert_eq!(rec.sensitivity, sens(0.5));
    }

    #[test]
    fn test_recommend_min_hits_and_empty() {
        let mut groups = SensitivityGroups::new();
        groups.extend(sens(0.8), errors(&[1.0]));
        groups.extend(sens(1.0), errors(&[5.0, 5.0, 5.0]));
        groups.extend(sens(1.2), errors(&[]));

        let rec = recommend(&groups.reports(None), 2).unwrap();
        assert_eq!(rec.sensitivity, sens(1.0));

        assert!(recommend(&groups.reports(None), 10).is_none());
        assert!(recommend(&[], 0).is_none());
    }
}
