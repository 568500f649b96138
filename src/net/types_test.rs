use super::*;

// =============================================================
// Role / User serde
// =============================================================

#[test]
fn role_uses_wire_tags() {
    assert_eq!(serde_json::to_string(&Role::HrAdmin).unwrap(), r#""hr_admin""#);
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), r#""employee""#);
}

#[test]
fn user_parses_login_payload() {
    let json = r#"{
        "id": "b8f7",
        "email": "admin@priacc.com",
        "employee_id": "PRI-001",
        "full_name": "Admin",
        "role": "hr_admin",
        "domain": null,
        "created_at": "2026-01-05T10:00:00",
        "is_active": true
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.role, Role::HrAdmin);
    assert_eq!(user.full_name, "Admin");
    assert!(user.is_active);
}

#[test]
fn user_round_trips_through_storage_json() {
    let user = User {
        id: "u1".to_owned(),
        email: "dev@priacc.com".to_owned(),
        employee_id: "PRI-042".to_owned(),
        full_name: "Dev Example".to_owned(),
        role: Role::Employee,
        domain: Some("Python".to_owned()),
        ..User::default()
    };
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn corrupt_user_json_fails_to_parse() {
    assert!(serde_json::from_str::<User>("{not json").is_err());
    // Missing required fields is also a parse failure, not a default user.
    assert!(serde_json::from_str::<User>(r#"{"role": "employee"}"#).is_err());
}

// =============================================================
// TodayAttendance helpers
// =============================================================

fn attendance(check_out: Option<&str>) -> Attendance {
    Attendance {
        id: "a1".to_owned(),
        employee_id: "PRI-042".to_owned(),
        employee_name: "Dev Example".to_owned(),
        check_in_time: "2026-08-30T09:00:00".to_owned(),
        check_out_time: check_out.map(str::to_owned),
        check_in_photo_url: None,
        check_out_photo_url: None,
        date: "2026-08-30".to_owned(),
        total_hours: None,
    }
}

#[test]
fn today_not_checked_in() {
    let today: TodayAttendance =
        serde_json::from_str(r#"{"status": "not_checked_in", "attendance": null}"#).unwrap();
    assert!(!today.is_checked_in());
    assert!(!today.is_checked_out());
}

#[test]
fn today_checked_in_without_checkout() {
    let today = TodayAttendance {
        status: "checked_in".to_owned(),
        attendance: Some(attendance(None)),
    };
    assert!(today.is_checked_in());
    assert!(!today.is_checked_out());
}

#[test]
fn today_checked_out() {
    let today = TodayAttendance {
        status: "checked_in".to_owned(),
        attendance: Some(attendance(Some("2026-08-30T18:00:00"))),
    };
    assert!(today.is_checked_out());
}

// =============================================================
// Wrapper defaults and update payloads
// =============================================================

#[test]
fn list_wrappers_tolerate_missing_fields() {
    let leaves: LeaveList = serde_json::from_str(r"{}").unwrap();
    assert!(leaves.leaves.is_empty());
    let stats: DashboardStats = serde_json::from_str(r"{}").unwrap();
    assert_eq!(stats.total_employees, 0);
}

#[test]
fn employee_update_omits_unset_fields() {
    let update = EmployeeUpdate {
        domain: Some("DevOps".to_owned()),
        ..EmployeeUpdate::default()
    };
    assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"domain":"DevOps"}"#);
}
