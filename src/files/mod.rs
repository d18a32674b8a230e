//! Filesystem boundary: raw log in, AUB text and skip reports out.

mod fs_utils;
pub mod input;
pub mod output;
pub mod report;

pub use input::read_input;
pub use output::{DEFAULT_OUTPUT_FILE, write_output};
pub use report::{ReportFormat, write_report};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for everything written to disk.
pub(crate) fn notify_written(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
