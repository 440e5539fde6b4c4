//! Section reader for the textual `.osu` format.

use tracing::debug;

use super::{Beatmap, HitObject, HitObjectKind};
use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::mode::GameMode;

const FORMAT_HEADER: &str = "osu file format";

const TYPE_CIRCLE: u32 = 1;
const TYPE_SLIDER: u32 = 1 << 1;
const TYPE_SPINNER: u32 = 1 << 3;
const TYPE_HOLD: u32 = 1 << 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    General,
    Metadata,
    HitObjects,
    Other,
}

pub(super) fn parse(content: &str) -> Result<Beatmap> {
    let mut lines = content.lines();

    let header = lines
        .by_ref()
        .map(|l| l.trim_start_matches('\u{feff}').trim())
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    if !header.starts_with(FORMAT_HEADER) {
        return Err(Error::BeatmapParse(format!(
            "missing '{}' header",
            FORMAT_HEADER
        )));
    }

    let mut map = Beatmap::default();
    let mut section = Section::None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = match &line[1..line.len() - 1] {
                "General" => Section::General,
                "Metadata" => Section::Metadata,
                "HitObjects" => Section::HitObjects,
                _ => Section::Other,
            };
            continue;
        }

        match section {
            Section::General => {
                if let Some(("Mode", value)) = split_key_value(line) {
                    map.mode = value
                        .parse::<u8>()
                        .ok()
                        .and_then(GameMode::from_u8)
                        .ok_or_else(|| Error::BeatmapParse(format!("invalid mode '{}'", value)))?;
                }
            }
            Section::Metadata => match split_key_value(line) {
                Some(("Title", value)) => map.title = value.to_string(),
                Some(("Artist", value)) => map.artist = value.to_string(),
                Some(("Version", value)) => map.version = value.to_string(),
                _ => {}
            },
            Section::HitObjects => match parse_hit_object(line) {
                Some(object) => map.hit_objects.push(object),
                None => debug!("Skipping malformed hit object: {}", line),
            },
            Section::None | Section::Other => {}
        }
    }

    Ok(map)
}

fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// `x,y,time,type,hitSound,objectParams,hitSample`
fn parse_hit_object(line: &str) -> Option<HitObject> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 4 {
        return None;
    }

    let x: f64 = parts[0].trim().parse().ok()?;
    let y: f64 = parts[1].trim().parse().ok()?;
    let time_ms: f64 = parts[2].trim().parse().ok()?;
    let object_type: u32 = parts[3].trim().parse().ok()?;

    let kind = if object_type & TYPE_SLIDER != 0 {
        HitObjectKind::Slider {
            repeats: parts.get(6).and_then(|s| s.trim().parse().ok()).unwrap_or(1),
            pixel_length: parts.get(7).and_then(|s| s.trim().parse().ok()).unwrap_or(0.0),
        }
    } else if object_type & TYPE_SPINNER != 0 {
        HitObjectKind::Spinner {
            end_time_ms: parts.get(5)?.trim().parse().ok()?,
        }
    } else if object_type & TYPE_HOLD != 0 {
        // Hold params are "endTime:hitSample"
        let end = parts.get(5)?.split(':').next()?;
        HitObjectKind::Hold {
            end_time_ms: end.trim().parse().ok()?,
        }
    } else if object_type & TYPE_CIRCLE != 0 {
        HitObjectKind::Circle
    } else {
        return None;
    };

    Some(HitObject {
        time_ms,
        pos: Vec2::new(x, y),
        kind,
    })
}
