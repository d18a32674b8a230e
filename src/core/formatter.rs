//! AUB formatter: records → fixed 6-column, tab-separated text.
//!
//! `<employee>\t<timestamp>\t1\t<flag>\t1\t0`

use crate::models::record::time_of;
use crate::models::{DirectionFlag, DirectionMode, Record};

const COL3: &str = "1";
const COL5: &str = "1";
const COL6: &str = "0";

/// Hour from which the fallback treats an event as OUT.
pub const AFTERNOON_HOUR: i64 = 12;

/// Format records with the default (`extras`) direction mode.
pub fn format(records: &[Record]) -> String {
    format_with(records, DirectionMode::Extras)
}

/// Format records with the given direction mode.
///
/// In `log-column` mode, records without an `I`/`O` marker produce no line;
/// callers that need to know about them go through [`crate::core::convert`].
pub fn format_with(records: &[Record], mode: DirectionMode) -> String {
    let lines: Vec<String> = records
        .iter()
        .filter_map(|r| direction_flag(r, mode).map(|flag| format_line(r, flag)))
        .collect();

    lines.join("\n").trim_end().to_string()
}

/// One output line.
pub fn format_line(record: &Record, flag: DirectionFlag) -> String {
    [
        record.employee_id.as_str(),
        record.timestamp.as_str(),
        COL3,
        flag.as_code(),
        COL5,
        COL6,
    ]
    .join("\t")
}

/// Derive column 4. Returns `None` only in `log-column` mode when the
/// record has no usable marker.
pub fn direction_flag(record: &Record, mode: DirectionMode) -> Option<DirectionFlag> {
    let marker = record.log_type().unwrap_or_default();

    match mode {
        DirectionMode::Extras => match marker.as_str() {
            "I" => Some(DirectionFlag::One),
            "O" => Some(DirectionFlag::Zero),
            _ => Some(hour_flag(&record.timestamp)),
        },
        DirectionMode::LogColumn => match marker.as_str() {
            "I" => Some(DirectionFlag::Zero),
            "O" => Some(DirectionFlag::One),
            _ => None,
        },
    }
}

/// Fallback: afternoon/evening → 1, morning or unreadable hour → 0.
pub fn hour_flag(timestamp: &str) -> DirectionFlag {
    let hour_token = time_of(timestamp).split(':').next().unwrap_or_default();

    match parse_leading_int(hour_token) {
        Some(hour) if hour >= AFTERNOON_HOUR => DirectionFlag::One,
        _ => DirectionFlag::Zero,
    }
}

/// Lenient integer parse: skips leading whitespace, accepts an optional
/// sign, then reads digits until the first non-digit. `None` without digits.
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
