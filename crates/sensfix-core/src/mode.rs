use serde::Serialize;
use strum::{FromRepr, IntoStaticStr};

/// Ruleset a replay was recorded in or a beatmap was authored for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum GameMode {
    #[default]
    #[strum(serialize = "osu!standard")]
    Standard = 0,
    #[strum(serialize = "osu!taiko")]
    Taiko = 1,
    #[strum(serialize = "osu!catch")]
    Catch = 2,
    #[strum(serialize = "osu!mania")]
    Mania = 3,
}

impl GameMode {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
