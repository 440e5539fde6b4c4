pub mod analysis;
pub mod beatmap;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mode;
pub mod replay;
pub mod report;
pub mod sensitivity;

pub use analysis::{
    AnalysisOptions, Analyzer, DirectionalSummary, ErrorSummary, HitError, HitMatch, MatchMode,
    Recommendation, ReplayAnalysis, SensitivityGroups, SensitivityReport, discover_replays,
    find_hit_frame, measure_replay, recommend,
};
pub use beatmap::{Beatmap, BeatmapLibrary, BeatmapSource, HitObject, HitObjectKind};
pub use config::Config;
pub use error::{Error, Result};
pub use geometry::Vec2;
pub use mode::GameMode;
pub use replay::{Keys, Replay, ReplayFrame};
pub use report::{AnalysisReport, ReportFormat};
pub use sensitivity::{Sensitivity, SensitivityTable, sensitivity_from_file_name};
