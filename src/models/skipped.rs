use serde::Serialize;
use std::fmt;

/// Why a non-blank input line produced no output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    TooFewFields { found: usize, required: usize },
    UnknownLogType { token: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found, required } => {
                write!(f, "too few fields ({found}, need {required})")
            }
            SkipReason::UnknownLogType { token } if token.is_empty() => {
                write!(f, "missing log type")
            }
            SkipReason::UnknownLogType { token } => write!(f, "unknown log type '{token}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line: usize, // 1-based, in the original content
    pub reason: SkipReason,
    pub content: String,
}
