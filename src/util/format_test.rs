use super::*;

// =============================================================
// clock_time
// =============================================================

#[test]
fn clock_time_extracts_hms() {
    assert_eq!(clock_time("2026-08-30T09:15:02.123456"), "09:15:02");
}

#[test]
fn clock_time_without_fraction() {
    assert_eq!(clock_time("2026-08-30T18:00:00"), "18:00:00");
}

#[test]
fn clock_time_passes_through_non_timestamps() {
    assert_eq!(clock_time("hr_marked"), "hr_marked");
}

#[test]
fn clock_time_passes_through_truncated_time() {
    assert_eq!(clock_time("2026-08-30T09:15"), "2026-08-30T09:15");
}

// =============================================================
// date_part
// =============================================================

#[test]
fn date_part_of_timestamp() {
    assert_eq!(date_part("2026-08-30T09:15:02"), "2026-08-30");
}

#[test]
fn date_part_of_plain_date() {
    assert_eq!(date_part("2026-08-30"), "2026-08-30");
}

// =============================================================
// hours_label / clock_or
// =============================================================

#[test]
fn hours_label_present() {
    assert_eq!(hours_label(Some(7.25)), "7.25h");
}

#[test]
fn hours_label_absent() {
    assert_eq!(hours_label(None), "-");
}

#[test]
fn clock_or_uses_placeholder() {
    assert_eq!(clock_or(None, "Not checked in"), "Not checked in");
    assert_eq!(clock_or(Some("2026-08-30T08:59:30"), "x"), "08:59:30");
}

// =============================================================
// data_url_payload
// =============================================================

#[test]
fn data_url_payload_strips_prefix() {
    assert_eq!(data_url_payload("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
}

#[test]
fn data_url_payload_passes_bare_base64_through() {
    assert_eq!(data_url_payload("/9j/4AAQ"), "/9j/4AAQ");
}
