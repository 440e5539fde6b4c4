use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse replay: {0}")]
    ReplayParse(String),

    #[error("Replay contains no cursor data")]
    MissingReplayData,

    #[error("Replay has no beatmap checksum")]
    MissingBeatmapHash,

    #[error("Unsupported game mode: {0}")]
    UnsupportedMode(String),

    #[error("Failed to parse beatmap: {0}")]
    BeatmapParse(String),

    #[error("Could not find beatmap for checksum {0} (unknown MD5)")]
    BeatmapNotFound(String),

    #[error("Songs folder does not exist: {0}")]
    SongsDirNotFound(PathBuf),

    #[error("Replays folder does not exist: {0}")]
    ReplaysDirNotFound(PathBuf),

    #[error("Invalid sensitivity: {0}")]
    InvalidSensitivity(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
