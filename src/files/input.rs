use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Read};

/// Read the whole input as text. `-` reads from stdin.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD (one warning is
/// printed); a leading byte-order mark is dropped.
pub fn read_input(source: &str) -> AppResult<String> {
    let bytes = if source == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        let path = expand_tilde(source);
        if !path.is_file() {
            return Err(AppError::InputNotFound(path.display().to_string()));
        }
        fs::read(&path)?
    };

    Ok(decode_text(source, &bytes))
}

/// Lossy UTF-8 decoding, BOM stripped.
pub fn decode_text(source: &str, bytes: &[u8]) -> String {
    let text = match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            warning(format!(
                "'{source}' is not valid UTF-8: invalid bytes replaced with U+FFFD"
            ));
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
