use chrono::NaiveDateTime;

/// Position of the explicit log-type marker inside `extras`
/// (raw field 6 of the biometric line).
pub const LOG_TYPE_INDEX: usize = 4;

/// Time portion used when the timestamp carries no space-separated time.
pub const DEFAULT_TIME: &str = "00:00:00";

/// One parsed line of the biometric attendance log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub employee_id: String, // field 0
    pub timestamp: String,   // field 1, "YYYY-MM-DD HH:MM:SS"
    pub extras: Vec<String>, // fields 2..N, verbatim
}

impl Record {
    pub fn new(
        employee_id: impl Into<String>,
        timestamp: impl Into<String>,
        extras: Vec<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            timestamp: timestamp.into(),
            extras,
        }
    }

    /// The explicit log-type marker, trimmed and upper-cased, if the line has one.
    pub fn log_type(&self) -> Option<String> {
        self.extras
            .get(LOG_TYPE_INDEX)
            .map(|s| s.trim().to_uppercase())
    }

    /// Time portion of the timestamp, see [`time_of`].
    pub fn time_part(&self) -> &str {
        time_of(&self.timestamp)
    }

    /// Strictly parsed timestamp; only used for display, never for conversion.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%d %H:%M:%S").ok()
    }
}

/// Time portion of a raw timestamp: the token between the first and the
/// second space. Consecutive spaces yield an empty token.
pub fn time_of(timestamp: &str) -> &str {
    timestamp.split(' ').nth(1).unwrap_or(DEFAULT_TIME)
}
