use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Column 4 of an AUB line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionFlag {
    Zero,
    One,
}

impl DirectionFlag {
    pub fn as_code(&self) -> &'static str {
        match self {
            DirectionFlag::Zero => "0",
            DirectionFlag::One => "1",
        }
    }
}

/// How the direction flag is derived from a record.
///
/// - `Extras`: the `I`/`O` marker at `extras[4]` wins (`I` → 1, `O` → 0),
///   otherwise the hour of the timestamp decides (>= 12 → 1).
/// - `LogColumn`: lines must carry at least 8 fields and the marker is
///   mapped the other way round (`I` → 0, `O` → 1), with no hour fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionMode {
    #[default]
    Extras,
    LogColumn,
}

impl DirectionMode {
    /// Minimum number of tab-separated fields a line needs to be converted.
    pub fn min_fields(&self) -> usize {
        match self {
            DirectionMode::Extras => 2,
            DirectionMode::LogColumn => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionMode::Extras => "extras",
            DirectionMode::LogColumn => "log-column",
        }
    }
}
