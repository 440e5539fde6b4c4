//! Hit-event extraction: which replay frame "hit" a given target.

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::replay::{Keys, ReplayFrame};

/// Default maximum distance in time between a target and its hit frame.
pub const DEFAULT_WINDOW_MS: f64 = 80.0;

/// Which frames count as a hit candidate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MatchMode {
    /// Any frame with a click key held.
    #[default]
    Held,
    /// Only frames where a click key goes down.
    Press,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    fn qualifies(self, frame: &ReplayFrame, previous: Option<&ReplayFrame>) -> bool {
        match self {
            MatchMode::Held => frame.keys.is_pressed(),
            MatchMode::Press => {
                let previous = previous.map(|f| f.keys).unwrap_or(Keys::NONE);
                frame.keys.newly_pressed(previous)
            }
        }
    }
}

/// The frame chosen for a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitMatch {
    pub frame_index: usize,
    /// Frame time minus target time; negative means early.
    pub time_delta_ms: f64,
}

/// Find the qualifying frame closest in time to `target_time_ms`.
///
/// `frames` must be sorted by time. Frames exactly `window_ms` away still
/// count. Ties go to the earlier frame.
pub fn find_hit_frame(
    frames: &[ReplayFrame],
    target_time_ms: f64,
    window_ms: f64,
    mode: MatchMode,
) -> Option<HitMatch> {
    let start = frames.partition_point(|f| f.time_ms < target_time_ms - window_ms);

    let mut best: Option<HitMatch> = None;
    for (index, frame) in frames.iter().enumerate().skip(start) {
        let delta = frame.time_ms - target_time_ms;
        if delta > window_ms {
            break;
        }

        let previous = index.checked_sub(1).map(|i| &frames[i]);
        if !mode.qualifies(frame, previous) {
            continue;
        }

        let closer = best.is_none_or(|b| delta.abs() < b.time_delta_ms.abs());
        if closer {
            best = Some(HitMatch {
                frame_index: index,
                time_delta_ms: delta,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    fn frame(time_ms: f64, keys: Keys) -> ReplayFrame {
        ReplayFrame {
            time_ms,
            pos: Vec2::new(time_ms, 0.0),
            keys,
        }
    }

    fn held() -> Keys {
        Keys::K1 | Keys::M1
    }

    #[test]
    fn test_picks_nearest_pressed_frame() {
        let frames = vec![
            frame(900.0, held()),
            frame(980.0, held()),
            frame(995.0, Keys::NONE),
            frame(1010.0, held()),
            frame(1070.0, held()),
        ];
        let hit = find_hit_frame(&frames, 1000.0, DEFAULT_WINDOW_MS, MatchMode::Held).unwrap();
        assert_eq!(hit.frame_index, 3);
        assert_eq!(hit.time_delta_ms, 10.0);
    }

    #[test]
    fn test_window_is_inclusive() {
        let frames = vec![frame(920.0, held())];
        let hit = find_hit_frame(&frames, 1000.0, 80.0, MatchMode::Held).unwrap();
        assert_eq!(hit.time_delta_ms, -80.0);

        assert!(find_hit_frame(&frames, 1000.5, 80.0, MatchMode::Held).is_none());
    }

    #[test]
    fn test_no_pressed_frame_in_window() {
        let frames = vec![
            frame(800.0, held()),
            frame(1000.0, Keys::NONE),
            frame(1000.0, Keys::SMOKE),
            frame(1200.0, held()),
        ];
        assert!(find_hit_frame(&frames, 1000.0, DEFAULT_WINDOW_MS, MatchMode::Held).is_none());
        assert!(find_hit_frame(&[], 1000.0, DEFAULT_WINDOW_MS, MatchMode::Held).is_none());
    }

    #[test]
    fn test_tie_goes_to_earlier_frame() {
        let frames = vec![frame(990.0, held()), frame(1010.0, held())];
        let hit = find_hit_frame(&frames, 1000.0, DEFAULT_WINDOW_MS, MatchMode::Held).unwrap();
        assert_eq!(hit.frame_index, 0);
    }

    #[test]
    fn test_press_mode_requires_key_down_edge() {
        let frames = vec![
            frame(950.0, Keys::NONE),
            frame(960.0, held()),
            frame(1000.0, held()),
            frame(1010.0, Keys::NONE),
        ];
        let held_hit = find_hit_frame(&frames, 1000.0, DEFAULT_WINDOW_MS, MatchMode::Held).unwrap();
        assert_eq!(held_hit.frame_index, 2);

        let press_hit =
            find_hit_frame(&frames, 1000.0, DEFAULT_WINDOW_MS, MatchMode::Press).unwrap();
        assert_eq!(press_hit.frame_index, 1);
        assert_eq!(press_hit.time_delta_ms, -40.0);
    }

    #[test]
    fn test_press_mode_first_frame_counts_as_edge() {
        let frames = vec![frame(1000.0, held())];
        assert!(find_hit_frame(&frames, 1000.0, DEFAULT_WINDOW_MS, MatchMode::Press).is_some());
    }

    #[test]
    fn test_match_mode_parse() {
        assert_eq!("held".parse::<MatchMode>().unwrap(), MatchMode::Held);
        assert_eq!("PRESS".parse::<MatchMode>().unwrap(), MatchMode::Press);
        assert!("tap".parse::<MatchMode>().is_err());
        assert_eq!(MatchMode::Press.as_str(), "press");
    }
}
