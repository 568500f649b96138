use super::*;

// =============================================================
// query_string
// =============================================================

#[test]
fn query_string_skips_absent_values() {
    let q = query_string(&[("start_date", Some("2026-08-01")), ("end_date", None)]);
    assert_eq!(q, "?start_date=2026-08-01");
}

#[test]
fn query_string_empty_when_nothing_set() {
    assert_eq!(query_string(&[("domain", None), ("employee_id", None)]), "");
}

#[test]
fn query_string_percent_encodes_values() {
    let q = query_string(&[("domain", Some("Data Science"))]);
    assert_eq!(q, "?domain=Data%20Science");
}

#[test]
fn query_string_joins_pairs_in_order() {
    let q = query_string(&[
        ("start_date", Some("2026-08-01")),
        ("end_date", Some("2026-08-31")),
        ("employee_id", Some("PRI-042")),
    ]);
    assert_eq!(q, "?start_date=2026-08-01&end_date=2026-08-31&employee_id=PRI-042");
}

// =============================================================
// form_encode (login body)
// =============================================================

#[test]
fn form_encode_login_credentials() {
    let body = form_encode(&[("username", "admin@priacc.com"), ("password", "Admin@123")]);
    assert_eq!(body, "username=admin%40priacc.com&password=Admin%40123");
}

// =============================================================
// endpoint / mark actions
// =============================================================

#[test]
fn endpoint_prepends_base_url() {
    // Without ATTENDANCE_API_URL set at compile time, paths are same-origin.
    assert_eq!(endpoint("/api/auth/me"), format!("{}/api/auth/me", base_url()));
}

#[test]
fn mark_action_wire_names() {
    assert_eq!(MarkAction::CheckIn.as_str(), "check_in");
    assert_eq!(MarkAction::CheckOut.as_str(), "check_out");
}
