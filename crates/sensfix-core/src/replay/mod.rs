//! Replay recordings.
//!
//! This module contains the cursor trace of a play:
//! - `Keys` - per-frame key state bitmask
//! - `ReplayFrame` - one timestamped cursor sample
//! - `Replay` - a decoded `.osr` file (see `loader` for decoding)

mod keys;
mod loader;

pub use keys::*;
pub use loader::{RawAction, frames_from_actions};

use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::mode::GameMode;

/// A cursor sample at an absolute replay time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFrame {
    pub time_ms: f64,
    pub pos: Vec2,
    pub keys: Keys,
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub mode: GameMode,
    pub beatmap_md5: Option<String>,
    pub player: Option<String>,
    pub hard_rock: bool,
    frames: Vec<ReplayFrame>,
}

impl Replay {
    /// Build a replay from frames, sorting them by time.
    ///
    /// The sort is stable so frames sharing a timestamp keep recording order.
    pub fn new(mode: GameMode, beatmap_md5: Option<String>, mut frames: Vec<ReplayFrame>) -> Self {
        frames.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));
        Self {
            mode,
            beatmap_md5,
            player: None,
            hard_rock: false,
            frames,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        loader::decode(bytes)
    }

    pub fn frames(&self) -> &[ReplayFrame] {
        &self.frames
    }

    pub fn ensure_standard(&self) -> Result<()> {
        if self.mode == GameMode::Standard {
            Ok(())
        } else {
            Err(Error::UnsupportedMode(self.mode.to_string()))
        }
    }
}
