// src/files/report.rs

use crate::errors::AppResult;
use crate::files::fs_utils::ensure_writable;
use crate::files::notify_written;
use crate::models::SkippedLine;
use crate::ui::messages::info;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Flat row for the CSV report.
#[derive(Serialize)]
struct SkippedRow<'a> {
    line: usize,
    reason: String,
    content: &'a str,
}

/// Write the list of skipped lines. An empty list still produces a file
/// (header only for CSV, `[]` for JSON) so scripted runs can rely on it.
pub fn write_report(
    path: &Path,
    skipped: &[SkippedLine],
    format: ReportFormat,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    info(format!(
        "Writing {} skip report: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));

    match format {
        ReportFormat::Csv => report_csv(path, skipped)?,
        ReportFormat::Json => report_json(path, skipped)?,
    }

    notify_written("Skip report", path);
    Ok(())
}

fn report_csv(path: &Path, skipped: &[SkippedLine]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    if skipped.is_empty() {
        wtr.write_record(["line", "reason", "content"])?;
    }

    for s in skipped {
        wtr.serialize(SkippedRow {
            line: s.line,
            reason: s.reason.to_string(),
            content: &s.content,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

fn report_json(path: &Path, skipped: &[SkippedLine]) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(skipped)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}
