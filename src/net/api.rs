//! REST client for the attendance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Outside the
//! browser every call fails with `ApiError::Unavailable`, mirroring how the
//! SSR stubs work elsewhere in the crate.
//!
//! Two behaviors apply to every request:
//!
//! - outbound, the persisted bearer token (when present) is attached as an
//!   `Authorization` header;
//! - inbound, any 401 wipes the persisted session and sends the browser back
//!   to the login route, no matter which call produced it. Everything else
//!   is handed to the caller unchanged, with no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Ack, AttendanceList, DashboardStats, EmployeeStatusReport, EmployeeUpdate, HolidayList,
    LeaveApplication, LeaveList, LoginResponse, NewEmployee, NewHoliday, PasswordChange,
    PasswordReset, TodayAttendance, User,
};
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Backend base URL baked in at compile time. Empty means same-origin
/// relative requests, which is how the app is normally deployed.
pub fn base_url() -> &'static str {
    option_env!("ATTENDANCE_API_URL").unwrap_or("")
}

/// Absolute URL for an API path.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// Build a `?k=v&...` query string, percent-encoding values and skipping
/// absent ones. Empty when nothing is set.
pub fn query_string(pairs: &[(&str, Option<&str>)]) -> String {
    let parts: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value.map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Encode a form-urlencoded body (the login endpoint expects one).
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Manual attendance actions available to the HR console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkAction {
    CheckIn,
    CheckOut,
}

impl MarkAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "check_in",
            Self::CheckOut => "check_out",
        }
    }
}

// =============================================================
// Transport plumbing (browser only)
// =============================================================

#[cfg(feature = "hydrate")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Attach `Authorization: Bearer <token>` when a token is persisted.
#[cfg(feature = "hydrate")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match storage::read_token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Global 401 reaction: tear down the persisted session and return to the
/// login route. Runs before the error reaches the caller, so by the time a
/// view sees `Unauthorized` the session is already gone.
///
/// The navigation is skipped when already at `/`, which keeps a failed
/// login's inline error visible instead of reloading the form.
#[cfg(feature = "hydrate")]
fn expire_session() {
    leptos::logging::warn!("authentication rejected; clearing session");
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let at_root = location.pathname().map(|p| p == "/").unwrap_or(false);
        if !at_root {
            let _ = location.set_href("/");
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if resp.ok() {
        resp.json::<T>().await.map_err(net_err)
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = super::error::from_response(status, &body);
        if err.is_auth_failure() {
            expire_session();
        }
        Err(err)
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(net_err)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&endpoint(path)))
        .json(body)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    read_response(resp).await
}

/// POST with all inputs in the query string (the HR mark endpoint).
#[cfg(feature = "hydrate")]
async fn post_empty<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(net_err)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::put(&endpoint(path)))
        .json(body)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_empty<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::put(&endpoint(path)))
        .send()
        .await
        .map_err(net_err)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(net_err)?;
    read_response(resp).await
}

// =============================================================
// Authentication
// =============================================================

/// `POST /api/auth/login` with a form-urlencoded `{username, password}`
/// body. `username` may be an email or an employee id.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form_encode(&[("username", username), ("password", password)]);
        let resp = gloo_net::http::Request::post(&endpoint("/api/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/auth/me`.
pub async fn fetch_me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/change-password`.
pub async fn change_password(payload: &PasswordChange) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/change-password", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/forgot-password` — asks the server to email an OTP.
pub async fn forgot_password(email: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
        }
        post_json("/api/auth/forgot-password", &Body { email }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/reset-password` with the emailed OTP.
pub async fn reset_password(payload: &PasswordReset) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/reset-password", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Employees (HR console)
// =============================================================

/// `POST /api/employees`.
pub async fn create_employee(payload: &NewEmployee) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/employees", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/employees`, optionally filtered by domain.
pub async fn fetch_employees(domain: Option<&str>) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = query_string(&[("domain", domain)]);
        get_json(&format!("/api/employees{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = domain;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/employees/{id}`.
pub async fn fetch_employee(employee_id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/employees/{employee_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = employee_id;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/employees/{id}`.
pub async fn update_employee(employee_id: &str, payload: &EmployeeUpdate) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&format!("/api/employees/{employee_id}"), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (employee_id, payload);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/employees/{id}` (deactivation on the server side).
pub async fn delete_employee(employee_id: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_json(&format!("/api/employees/{employee_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = employee_id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/domains`.
pub async fn fetch_domains() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let list: super::types::DomainList = get_json("/api/domains").await?;
        Ok(list.domains)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Attendance
// =============================================================

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct PhotoPayload<'a> {
    photo_base64: &'a str,
}

/// `POST /api/attendance/check-in` with a captured photo.
pub async fn check_in(photo_base64: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/attendance/check-in", &PhotoPayload { photo_base64 }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = photo_base64;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/attendance/check-out` with a captured photo.
pub async fn check_out(photo_base64: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/attendance/check-out", &PhotoPayload { photo_base64 }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = photo_base64;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/attendance/my-history`, optionally bounded by dates.
pub async fn fetch_my_history(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<AttendanceList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = query_string(&[("start_date", start_date), ("end_date", end_date)]);
        get_json(&format!("/api/attendance/my-history{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (start_date, end_date);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/attendance/today`.
pub async fn fetch_today() -> Result<TodayAttendance, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/attendance/today").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/attendance/reports` (HR only).
pub async fn fetch_reports(
    start_date: &str,
    end_date: &str,
    domain: Option<&str>,
    employee_id: Option<&str>,
) -> Result<AttendanceList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = query_string(&[
            ("start_date", Some(start_date)),
            ("end_date", Some(end_date)),
            ("domain", domain),
            ("employee_id", employee_id),
        ]);
        get_json(&format!("/api/attendance/reports{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (start_date, end_date, domain, employee_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Leaves
// =============================================================

/// `POST /api/leaves/apply`.
pub async fn apply_leave(payload: &LeaveApplication) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/leaves/apply", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/leaves/my-leaves`.
pub async fn fetch_my_leaves() -> Result<LeaveList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/leaves/my-leaves").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/leaves/all` (HR only), optionally filtered by status.
pub async fn fetch_all_leaves(status: Option<&str>) -> Result<LeaveList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = query_string(&[("status", status)]);
        get_json(&format!("/api/leaves/all{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/leaves/{id}/status?status=approved|rejected` (HR only).
pub async fn update_leave_status(leave_id: &str, status: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = query_string(&[("status", Some(status))]);
        put_empty(&format!("/api/leaves/{leave_id}/status{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (leave_id, status);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Holidays
// =============================================================

/// `POST /api/holidays` (HR only).
pub async fn create_holiday(payload: &NewHoliday) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/holidays", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/holidays`, optionally limited to one year.
pub async fn fetch_holidays(year: Option<i32>) -> Result<HolidayList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let year = year.map(|y| y.to_string());
        let query = query_string(&[("year", year.as_deref())]);
        get_json(&format!("/api/holidays{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = year;
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/holidays/{id}` (HR only).
pub async fn delete_holiday(holiday_id: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_json(&format!("/api/holidays/{holiday_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = holiday_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// HR attendance console
// =============================================================

/// `GET /api/hr/attendance/employee-status` — today's presence per employee.
pub async fn fetch_employee_status() -> Result<EmployeeStatusReport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/hr/attendance/employee-status").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/hr/attendance/mark` — manually mark an employee in or out.
pub async fn mark_attendance(employee_id: &str, action: MarkAction) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let query = query_string(&[
            ("employee_id", Some(employee_id)),
            ("action", Some(action.as_str())),
        ]);
        post_empty(&format!("/api/hr/attendance/mark{query}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (employee_id, action);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Dashboard
// =============================================================

/// `GET /api/dashboard/stats` (HR only).
pub async fn fetch_stats() -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/dashboard/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
