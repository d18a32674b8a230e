use crate::core::formatter::{direction_flag, format_line};
use crate::core::parser::parse_with_report;
use crate::models::{DirectionMode, Record, SkipReason, SkippedLine};
use crate::ui::messages::debug;

/// Output of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    pub output: String,
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
}

impl ConversionResult {
    pub fn converted(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

/// Parser → Formatter pipeline.
pub struct Conversion;

impl Conversion {
    /// Convert raw biometric text into AUB text.
    ///
    /// `records` holds only the records that produced an output line, in input
    /// order; everything else ends up in `skipped`, sorted by line number.
    pub fn run(content: &str, mode: DirectionMode, verbose: bool) -> ConversionResult {
        if verbose {
            debug(format!("Raw content: {} bytes", content.len()));
        }

        let outcome = parse_with_report(content, mode.min_fields());
        let mut skipped = outcome.skipped;
        let mut records = Vec::with_capacity(outcome.parsed.len());
        let mut lines = Vec::with_capacity(outcome.parsed.len());

        for parsed in outcome.parsed {
            match direction_flag(&parsed.record, mode) {
                Some(flag) => {
                    lines.push(format_line(&parsed.record, flag));
                    records.push(parsed.record);
                }
                None => skipped.push(SkippedLine {
                    line: parsed.line,
                    reason: SkipReason::UnknownLogType {
                        token: parsed.record.log_type().unwrap_or_default(),
                    },
                    content: parsed.raw,
                }),
            }
        }
        skipped.sort_by_key(|s| s.line);

        if verbose {
            debug(format!("Parsed records: {}", records.len()));
            if let Some(first) = records.first() {
                debug(format!(
                    "First record: employee={} timestamp={} extras={:?}",
                    first.employee_id, first.timestamp, first.extras
                ));
            }
            debug(format!("Skipped lines: {}", skipped.len()));
        }

        ConversionResult {
            output: lines.join("\n").trim_end().to_string(),
            records,
            skipped,
        }
    }
}
