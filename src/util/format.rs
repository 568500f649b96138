//! Display formatting for server timestamps.
//!
//! The backend sends naive ISO 8601 strings (`2026-08-30T09:15:02.123456`).
//! Views only need the wall-clock time or the date part, so these helpers
//! slice the string rather than pulling in a datetime crate.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Extract `HH:MM:SS` from an ISO 8601 timestamp.
///
/// Returns the input unchanged when it doesn't look like a timestamp, so a
/// malformed record still renders something rather than a blank cell.
pub fn clock_time(iso: &str) -> String {
    match iso.split_once('T') {
        Some((_, time)) => {
            let hms: String = time.chars().take(8).collect();
            if hms.len() == 8 { hms } else { iso.to_owned() }
        }
        None => iso.to_owned(),
    }
}

/// Extract `YYYY-MM-DD` from an ISO 8601 timestamp or date string.
pub fn date_part(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}

/// Render an optional hour count as e.g. `7.25h`, or `-` when absent.
pub fn hours_label(total_hours: Option<f64>) -> String {
    total_hours.map_or_else(|| "-".to_owned(), |h| format!("{h}h"))
}

/// Render an optional timestamp as a clock time, or a placeholder.
pub fn clock_or(iso: Option<&str>, placeholder: &str) -> String {
    iso.map_or_else(|| placeholder.to_owned(), clock_time)
}

/// Strip the `data:image/jpeg;base64,` prefix from a captured photo.
///
/// The check-in endpoints expect the bare base64 payload.
pub fn data_url_payload(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map_or(data_url, |(_, payload)| payload)
}
