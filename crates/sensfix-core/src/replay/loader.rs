//! `.osr` decoding through `osu_db`.

use osu_db::{Mod, Mode};
use tracing::debug;

use super::{Keys, Replay, ReplayFrame};
use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::mode::GameMode;

/// Delta marking the trailing RNG seed action of modern replays.
const SEED_DELTA: i64 = -12345;

/// One undecoded replay action: delta time since the previous action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawAction {
    pub delta: i64,
    pub x: f32,
    pub y: f32,
    pub keys: u32,
}

pub(super) fn decode(bytes: &[u8]) -> Result<Replay> {
    let raw = osu_db::Replay::from_bytes(bytes).map_err(|e| Error::ReplayParse(e.to_string()))?;
    from_raw(&raw)
}

fn from_raw(raw: &osu_db::Replay) -> Result<Replay> {
    let mode = match raw.mode {
        Mode::Standard => GameMode::Standard,
        Mode::Taiko => GameMode::Taiko,
        Mode::CatchTheBeat => GameMode::Catch,
        Mode::Mania => GameMode::Mania,
    };

    let actions = raw.replay_data.as_ref().ok_or(Error::MissingReplayData)?;
    let frames = frames_from_actions(actions.iter().map(|action| RawAction {
        delta: action.delta as i64,
        x: action.x as f32,
        y: action.y as f32,
        keys: action.z as u32,
    }));
    debug!("Decoded {} replay frames", frames.len());

    let mut replay = Replay::new(mode, raw.beatmap_hash.clone(), frames);
    replay.player = raw.player_name.clone();
    replay.hard_rock = raw.mods.contains(Mod::HardRock);
    Ok(replay)
}

/// Accumulate action deltas into absolutely timed frames.
///
/// The seed action neither produces a frame nor advances time.
pub fn frames_from_actions<I>(actions: I) -> Vec<ReplayFrame>
where
    I: IntoIterator<Item = RawAction>,
{
    let mut time = 0i64;
    actions
        .into_iter()
        .filter(|action| action.delta != SEED_DELTA)
        .map(|action| {
            time += action.delta;
            ReplayFrame {
                time_ms: time as f64,
                pos: Vec2::new(action.x as f64, action.y as f64),
                keys: Keys::from_bits(action.keys),
            }
        })
        .collect()
}
