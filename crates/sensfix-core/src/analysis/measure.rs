//! Positional error of each matched hit.

use serde::Serialize;
use tracing::debug;

use super::matcher::{DEFAULT_WINDOW_MS, MatchMode, find_hit_frame};
use crate::beatmap::{Beatmap, HitObject};
use crate::geometry::Vec2;
use crate::replay::Replay;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisOptions {
    pub window_ms: f64,
    pub mode: MatchMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_WINDOW_MS,
            mode: MatchMode::default(),
        }
    }
}

/// Error of one hit circle.
///
/// `along` and `across` are measured in the frame of the approach direction
/// (previous object to this one). `along > 0` is overshoot, `along < 0` is
/// undershoot, `across > 0` lies clockwise of the movement on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitError {
    pub object_index: usize,
    pub target_time_ms: f64,
    pub target: Vec2,
    pub cursor: Vec2,
    pub time_delta_ms: f64,
    pub distance: f64,
    pub along: Option<f64>,
    pub across: Option<f64>,
}

/// Unit vector of the movement into `objects[index]`.
///
/// Only defined after a circle; slider and spinner end positions are not
/// tracked.
pub fn approach_direction(objects: &[HitObject], index: usize) -> Option<Vec2> {
    let previous = objects.get(index.checked_sub(1)?)?;
    if !previous.is_circle() {
        return None;
    }
    (objects.get(index)?.pos - previous.pos).normalized()
}

/// Compute the error vector for a single target/cursor pair.
pub fn measure_hit(
    object_index: usize,
    target: &HitObject,
    cursor: Vec2,
    time_delta_ms: f64,
    direction: Option<Vec2>,
) -> HitError {
    let offset = cursor - target.pos;
    HitError {
        object_index,
        target_time_ms: target.time_ms,
        target: target.pos,
        cursor,
        time_delta_ms,
        distance: offset.length(),
        along: direction.map(|dir| offset.dot(dir)),
        across: direction.map(|dir| dir.cross(offset)),
    }
}

/// Match every hit circle of `beatmap` against the replay and measure it.
///
/// Circles with no qualifying frame in the window are left out.
pub fn measure_replay(replay: &Replay, beatmap: &Beatmap, options: &AnalysisOptions) -> Vec<HitError> {
    let flipped;
    let beatmap = if replay.hard_rock {
        flipped = beatmap.flipped_vertically();
        &flipped
    } else {
        beatmap
    };

    let frames = replay.frames();
    let objects = &beatmap.hit_objects;
    let mut errors = Vec::new();
    let mut unmatched = 0usize;

    for (index, object) in objects.iter().enumerate() {
        if object.has_end_time() {
            continue;
        }

        let Some(hit) = find_hit_frame(frames, object.time_ms, options.window_ms, options.mode)
        else {
            unmatched += 1;
            continue;
        };

        let cursor = frames[hit.frame_index].pos;
        let direction = approach_direction(objects, index);
        errors.push(measure_hit(index, object, cursor, hit.time_delta_ms, direction));
    }

    debug!(
        "Matched {} hit circles, {} without a press in window",
        errors.len(),
        unmatched
    );
    errors
}
