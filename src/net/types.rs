//! Serde models for the attendance backend's request and response payloads.
//!
//! Field names mirror the server's JSON exactly; no renaming happens on the
//! wire except for the `role` enum tags.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Drives the route guard and which dashboard renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "employee")]
    Employee,
    #[serde(rename = "hr_admin")]
    HrAdmin,
}

/// An authenticated user record as returned by `/api/auth/login` and
/// `/api/auth/me`, also the shape persisted to localStorage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub email: String,
    pub employee_id: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hierarchy_level: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Response body of `POST /api/auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub token_type: String,
    pub user: User,
}

/// Payload for `POST /api/auth/change-password`.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Payload for `POST /api/auth/reset-password`.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordReset {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Payload for `POST /api/employees`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewEmployee {
    pub email: String,
    pub employee_id: String,
    pub full_name: String,
    pub password: String,
    pub domain: Option<String>,
}

/// Payload for `PUT /api/employees/{id}`. Only set fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

/// A single day's attendance record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub check_in_photo_url: Option<String>,
    #[serde(default)]
    pub check_out_photo_url: Option<String>,
    pub date: String,
    #[serde(default)]
    pub total_hours: Option<f64>,
}

/// Response body of `GET /api/attendance/today`.
///
/// `status` is `"checked_in"` when a record exists for today, otherwise
/// `"not_checked_in"` with no attendance attached.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodayAttendance {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub attendance: Option<Attendance>,
}

impl TodayAttendance {
    pub fn is_checked_in(&self) -> bool {
        self.status == "checked_in"
    }

    pub fn is_checked_out(&self) -> bool {
        self.attendance
            .as_ref()
            .is_some_and(|a| a.check_out_time.is_some())
    }
}

/// List wrapper for attendance history and report responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AttendanceList {
    #[serde(default)]
    pub attendance: Vec<Attendance>,
}

/// Payload for `POST /api/leaves/apply`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LeaveApplication {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// A leave request as stored by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub applied_on: String,
    pub days_count: i64,
}

/// List wrapper for `GET /api/leaves/my-leaves` and `/api/leaves/all`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LeaveList {
    #[serde(default)]
    pub leaves: Vec<Leave>,
}

/// Payload for `POST /api/holidays`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewHoliday {
    pub name: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A company holiday.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// List wrapper for `GET /api/holidays`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HolidayList {
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// Response body of `GET /api/dashboard/stats`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: i64,
    #[serde(default)]
    pub present_today: i64,
    #[serde(default)]
    pub absent_today: i64,
    #[serde(default)]
    pub pending_leaves: i64,
    #[serde(default)]
    pub domain_counts: std::collections::BTreeMap<String, i64>,
}

/// One row of `GET /api/hr/attendance/employee-status`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmployeeDayStatus {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub is_present: bool,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub total_hours: Option<f64>,
}

/// Response body of `GET /api/hr/attendance/employee-status`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmployeeStatusReport {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub employees: Vec<EmployeeDayStatus>,
}

/// List wrapper for `GET /api/domains`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DomainList {
    #[serde(default)]
    pub domains: Vec<String>,
}

/// Generic `{"message": ...}` acknowledgement many mutating endpoints return.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}
