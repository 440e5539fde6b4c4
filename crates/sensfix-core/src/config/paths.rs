use std::path::PathBuf;

/// Replays folder used when none is configured, relative to the working directory.
pub const DEFAULT_REPLAYS_DIR: &str = "Replays";

/// Songs folder of a default osu!stable install.
///
/// On Windows this is `%LOCALAPPDATA%\osu!\Songs`; elsewhere the platform's
/// local data directory is used the same way.
pub fn default_songs_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("osu!").join("Songs"))
        .unwrap_or_else(|| PathBuf::from("Songs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_songs_dir_ends_with_songs() {
        assert!(default_songs_dir().ends_with("Songs"));
    }
}
