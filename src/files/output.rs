use crate::errors::{AppError, AppResult};
use crate::files::fs_utils::ensure_writable;
use crate::files::notify_written;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// File name used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT_FILE: &str = "converted_aub_format.txt";

/// Write converted AUB text to `path`, exactly as given (no newline appended).
///
/// Refuses to write an empty result.
pub fn write_output(path: &Path, text: &str, force: bool) -> AppResult<()> {
    if text.is_empty() {
        return Err(AppError::EmptyOutput);
    }

    ensure_writable(path, force)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        info(format!("Creating directory {}", parent.display()));
        fs::create_dir_all(parent)?;
    }

    fs::write(path, text.as_bytes())?;

    notify_written("AUB file", path);
    Ok(())
}
