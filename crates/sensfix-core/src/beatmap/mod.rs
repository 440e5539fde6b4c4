//! Beatmap geometry.
//!
//! This module contains the target side of the analysis:
//! - `HitObject`, `HitObjectKind` - timed targets on the playfield
//! - `Beatmap` - parsed `.osu` file (see `parser`)
//! - `BeatmapLibrary` - checksum index over a Songs folder

mod library;
mod parser;

pub use library::*;

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::geometry::Vec2;
use crate::mode::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitObjectKind {
    Circle,
    Slider { repeats: u32, pixel_length: f64 },
    Spinner { end_time_ms: f64 },
    Hold { end_time_ms: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitObject {
    pub time_ms: f64,
    pub pos: Vec2,
    pub kind: HitObjectKind,
}

impl HitObject {
    pub fn circle(time_ms: f64, x: f64, y: f64) -> Self {
        Self {
            time_ms,
            pos: Vec2::new(x, y),
            kind: HitObjectKind::Circle,
        }
    }

    /// Everything except a plain circle spans a duration.
    pub fn has_end_time(&self) -> bool {
        !self.is_circle()
    }

    pub fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Beatmap {
    pub mode: GameMode,
    pub title: String,
    pub artist: String,
    pub version: String,
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    pub fn parse(content: &str) -> Result<Self> {
        parser::parse(content)
    }

    /// "Artist - Title [Version]"
    pub fn display_name(&self) -> String {
        format!("{} - {} [{}]", self.artist, self.title, self.version)
    }

    /// Geometry as seen with HardRock enabled.
    pub fn flipped_vertically(&self) -> Self {
        let mut flipped = self.clone();
        for object in &mut flipped.hit_objects {
            object.pos = object.pos.flipped_vertically();
        }
        flipped
    }
}
