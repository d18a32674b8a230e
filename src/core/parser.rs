//! Biometric log parser: raw text → ordered records.
//!
//! The input has no header; fields are positional and tab-separated:
//! `[0]` employee id, `[1]` "YYYY-MM-DD HH:MM:SS", `[2..]` device-specific extras.

use crate::models::{Record, SkipReason, SkippedLine};

/// Fields a line needs to become a [`Record`].
pub const MIN_FIELDS: usize = 2;

/// A record together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub line: usize,
    pub raw: String,
    pub record: Record,
}

/// Result of a parse that keeps track of what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub parsed: Vec<ParsedLine>,
    pub skipped: Vec<SkippedLine>,
}

impl ParseOutcome {
    pub fn into_records(self) -> Vec<Record> {
        self.parsed.into_iter().map(|p| p.record).collect()
    }
}

/// Parse raw content. Lines with fewer than two fields are dropped silently.
pub fn parse(content: &str) -> Vec<Record> {
    parse_with_report(content, MIN_FIELDS).into_records()
}

/// Parse raw content, recording every non-blank line that was dropped.
///
/// Blank and whitespace-only lines are ignored without being reported.
/// Line numbers are 1-based and refer to the original content.
pub fn parse_with_report(content: &str, min_fields: usize) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let required = min_fields.max(MIN_FIELDS);

    let body = content.trim();
    let leading = content.len() - content.trim_start().len();
    let first_line = content[..leading].matches('\n').count() + 1;

    for (idx, line) in body.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();

        if parts.len() < required {
            outcome.skipped.push(SkippedLine {
                line: first_line + idx,
                reason: SkipReason::TooFewFields {
                    found: parts.len(),
                    required,
                },
                content: line.trim_end().to_string(),
            });
            continue;
        }

        let extras = parts[2..].iter().map(|s| s.to_string()).collect();
        outcome.parsed.push(ParsedLine {
            line: first_line + idx,
            raw: line.trim_end().to_string(),
            record: Record::new(parts[0], parts[1], extras),
        });
    }

    outcome
}
