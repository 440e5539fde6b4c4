//! Replay discovery and the load -> match -> measure pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::measure::{AnalysisOptions, HitError, measure_replay};
use crate::beatmap::{Beatmap, BeatmapLibrary};
use crate::error::{Error, Result};
use crate::replay::Replay;

/// Measured hits of a single replay file.
#[derive(Debug, Clone)]
pub struct ReplayAnalysis {
    pub file_name: String,
    pub player: Option<String>,
    pub beatmap: Beatmap,
    pub errors: Vec<HitError>,
}

pub struct Analyzer {
    library: BeatmapLibrary,
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(library: BeatmapLibrary, options: AnalysisOptions) -> Self {
        Self { library, options }
    }

    pub fn analyze_path(&self, path: &Path) -> Result<ReplayAnalysis> {
        let replay = Replay::from_path(path)?;
        self.analyze(file_name_of(path), &replay)
    }

    /// Resolve the replay's beatmap and measure every hit circle.
    pub fn analyze(&self, file_name: String, replay: &Replay) -> Result<ReplayAnalysis> {
        replay.ensure_standard()?;

        let hash = replay
            .beatmap_md5
            .as_deref()
            .ok_or(Error::MissingBeatmapHash)?;
        let beatmap = self
            .library
            .lookup(hash)?
            .ok_or_else(|| Error::BeatmapNotFound(hash.to_string()))?;
        debug!("{}: beatmap {}", file_name, beatmap.display_name());

        let errors = measure_replay(replay, &beatmap, &self.options);
        Ok(ReplayAnalysis {
            file_name,
            player: replay.player.clone(),
            beatmap,
            errors,
        })
    }
}

/// All `.osr` files directly inside `dir`, sorted by file name.
pub fn discover_replays(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::ReplaysDirNotFound(dir.to_path_buf()));
    }

    let mut replays: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("osr"))
        })
        .collect();
    replays.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    Ok(replays)
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
