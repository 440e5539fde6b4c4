//! Sensitivity labels attached to replays.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// In-game mouse sensitivity multiplier. Always finite and positive.
#[derive(Debug, Clone, Copy)]
pub struct Sensitivity(f64);

impl Sensitivity {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidSensitivity(value.to_string()))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Effective DPI for a given mouse DPI.
    pub fn edpi(self, dpi: f64) -> f64 {
        dpi * self.0
    }
}

impl PartialEq for Sensitivity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Sensitivity {}

impl PartialOrd for Sensitivity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sensitivity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl FromStr for Sensitivity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidSensitivity(trimmed.to_string()))?;
        Self::new(value).map_err(|_| Error::InvalidSensitivity(trimmed.to_string()))
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl Serialize for Sensitivity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Sensitivity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Sensitivity::new(value).map_err(serde::de::Error::custom)
    }
}

/// Extract a sensitivity from a file name like `map sens_0.85.osr`.
///
/// Looks for `sens` (any case) followed by an optional `_`, `-`, `=` or space
/// and a decimal number. Returns the first valid match.
pub fn sensitivity_from_file_name(name: &str) -> Option<Sensitivity> {
    let lower = name.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(found) = lower[search_from..].find("sens") {
        let after = search_from + found + "sens".len();
        let rest = lower[after..].trim_start_matches(&['_', '-', '=', ' '][..]);
        let number: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let number = number.trim_end_matches('.');

        if let Ok(sens) = number.parse::<Sensitivity>() {
            return Some(sens);
        }
        search_from = after;
    }
    None
}

/// Explicit file name to sensitivity assignments.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SensitivityTable {
    entries: HashMap<String, Sensitivity>,
}

impl SensitivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file_name: impl Into<String>, sensitivity: Sensitivity) {
        self.entries.insert(file_name.into(), sensitivity);
    }

    pub fn get(&self, file_name: &str) -> Option<Sensitivity> {
        self.entries.get(file_name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sens(value: f64) -> Sensitivity {
        Sensitivity::new(value).unwrap()
    }

    #[test]
    fn test_parse_sensitivity() {
        assert_eq!("0.8".parse::<Sensitivity>().unwrap(), sens(0.8));
        assert_eq!(" 1.25 ".parse::<Sensitivity>().unwrap(), sens(1.25));
        assert!("".parse::<Sensitivity>().is_err());
        assert!("abc".parse::<Sensitivity>().is_err());
        assert!("0".parse::<Sensitivity>().is_err());
        assert!("-1".parse::<Sensitivity>().is_err());
        assert!("inf".parse::<Sensitivity>().is_err());
        assert!("NaN".parse::<Sensitivity>().is_err());
    }

    #[test]
    fn test_display_and_edpi() {
        assert_eq!(sens(0.85).to_string(), "0.850");
        assert_eq!(sens(0.85).edpi(800.0), 680.0);
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![sens(1.2), sens(0.8), sens(1.0)];
        values.sort();
        assert_eq!(values, vec![sens(0.8), sens(1.0), sens(1.2)]);
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(sensitivity_from_file_name("nomod sens_0.85.osr"), Some(sens(0.85)));
        assert_eq!(sensitivity_from_file_name("SENS1.osr"), Some(sens(1.0)));
        assert_eq!(sensitivity_from_file_name("play sens-1.2 2024.osr"), Some(sens(1.2)));
        assert_eq!(sensitivity_from_file_name("sens=0.7.osr"), Some(sens(0.7)));
        // First "sens" has no number, the second does
        assert_eq!(
            sensitivity_from_file_name("sensible sens 0.9.osr"),
            Some(sens(0.9))
        );
        assert_eq!(sensitivity_from_file_name("replay 0.85.osr"), None);
        assert_eq!(sensitivity_from_file_name("sens_0.osr"), None);
    }

    #[test]
    fn test_table_deserialize() {
        let table: SensitivityTable = toml::from_str("\"a.osr\" = 0.85\n\"b.osr\" = 1.0\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a.osr"), Some(sens(0.85)));
        assert_eq!(table.get("c.osr"), None);

        assert!(toml::from_str::<SensitivityTable>("\"a.osr\" = -1.0\n").is_err());
    }
}
