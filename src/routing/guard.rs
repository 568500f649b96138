//! Role-based route guard.
//!
//! Evaluated on every navigation and every session mutation; nothing here is
//! persisted. The decision table:
//!
//! | path                  | logged out     | employee         | hr admin     |
//! |-----------------------|----------------|------------------|--------------|
//! | `/`                   | Login          | → employee home  | → hr home    |
//! | `/forgot-password`    | ForgotPassword | → `/`            | → `/`        |
//! | `/employee-dashboard` | → `/`          | EmployeeDashboard| → `/`        |
//! | `/hr-dashboard`       | → `/`          | → `/`            | HRDashboard  |
//! | anything else         | → `/`          | → `/`            | → `/`        |
//!
//! While the persisted session is still being read the guard holds: a
//! neutral render with no navigation, so a reload never flashes the login
//! page at an authenticated user.
//!
//! This is UX routing only. The server re-checks authorization on every
//! call; hiding a view here protects nothing.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::AuthView;

pub const ROOT: &str = "/";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const EMPLOYEE_DASHBOARD: &str = "/employee-dashboard";
pub const HR_DASHBOARD: &str = "/hr-dashboard";

/// A requested path, normalized to the routes the app knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    ForgotPassword,
    EmployeeDashboard,
    HrDashboard,
    Other,
}

impl Route {
    /// Map a raw path to a route. Trailing slashes are tolerated; anything
    /// unknown collapses to `Other`.
    pub fn parse(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Root,
            "/forgot-password" => Self::ForgotPassword,
            "/employee-dashboard" => Self::EmployeeDashboard,
            "/hr-dashboard" => Self::HrDashboard,
            _ => Self::Other,
        }
    }
}

/// The view a `Render` decision selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    ForgotPassword,
    EmployeeDashboard,
    HrDashboard,
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render(View),
    /// Navigate elsewhere instead of rendering.
    Redirect(&'static str),
    /// Session restore still pending; render neutrally, navigate nowhere.
    Hold,
}

/// Where an authenticated user lands from `/`.
pub fn home_path(auth: AuthView) -> &'static str {
    match auth {
        AuthView::HrAdmin => HR_DASHBOARD,
        _ => EMPLOYEE_DASHBOARD,
    }
}

/// Decide what to do for `route` given the current session.
pub fn decide(auth: AuthView, route: Route) -> RouteDecision {
    use RouteDecision::{Hold, Redirect, Render};

    if auth == AuthView::Loading {
        return Hold;
    }

    match (route, auth) {
        (Route::Root, AuthView::Unauthenticated) => Render(View::Login),
        (Route::Root, view) => Redirect(home_path(view)),

        (Route::ForgotPassword, AuthView::Unauthenticated) => Render(View::ForgotPassword),

        (Route::EmployeeDashboard, AuthView::Employee) => Render(View::EmployeeDashboard),
        (Route::HrDashboard, AuthView::HrAdmin) => Render(View::HrDashboard),

        _ => Redirect(ROOT),
    }
}
