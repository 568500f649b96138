use super::*;
use crate::net::types::{Role, User};
use crate::state::session::SessionState;

// =============================================================
// Route parsing
// =============================================================

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/"), Route::Root);
    assert_eq!(Route::parse("/forgot-password"), Route::ForgotPassword);
    assert_eq!(Route::parse("/employee-dashboard"), Route::EmployeeDashboard);
    assert_eq!(Route::parse("/hr-dashboard"), Route::HrDashboard);
}

#[test]
fn parse_tolerates_trailing_slash() {
    assert_eq!(Route::parse("/hr-dashboard/"), Route::HrDashboard);
}

#[test]
fn parse_unknown_path_is_other() {
    assert_eq!(Route::parse("/admin"), Route::Other);
    assert_eq!(Route::parse("/employee-dashboard/extra"), Route::Other);
}

// =============================================================
// Decision table, row by row
// =============================================================

#[test]
fn root_renders_login_when_unauthenticated() {
    assert_eq!(
        decide(AuthView::Unauthenticated, Route::Root),
        RouteDecision::Render(View::Login)
    );
}

#[test]
fn root_redirects_employee_to_employee_dashboard() {
    assert_eq!(
        decide(AuthView::Employee, Route::Root),
        RouteDecision::Redirect(EMPLOYEE_DASHBOARD)
    );
}

#[test]
fn root_redirects_hr_admin_to_hr_dashboard() {
    assert_eq!(
        decide(AuthView::HrAdmin, Route::Root),
        RouteDecision::Redirect(HR_DASHBOARD)
    );
}

#[test]
fn forgot_password_renders_only_when_unauthenticated() {
    assert_eq!(
        decide(AuthView::Unauthenticated, Route::ForgotPassword),
        RouteDecision::Render(View::ForgotPassword)
    );
    assert_eq!(
        decide(AuthView::Employee, Route::ForgotPassword),
        RouteDecision::Redirect(ROOT)
    );
    assert_eq!(
        decide(AuthView::HrAdmin, Route::ForgotPassword),
        RouteDecision::Redirect(ROOT)
    );
}

#[test]
fn employee_dashboard_requires_employee() {
    assert_eq!(
        decide(AuthView::Employee, Route::EmployeeDashboard),
        RouteDecision::Render(View::EmployeeDashboard)
    );
    assert_eq!(
        decide(AuthView::Unauthenticated, Route::EmployeeDashboard),
        RouteDecision::Redirect(ROOT)
    );
    assert_eq!(
        decide(AuthView::HrAdmin, Route::EmployeeDashboard),
        RouteDecision::Redirect(ROOT)
    );
}

#[test]
fn hr_dashboard_requires_hr_admin() {
    assert_eq!(
        decide(AuthView::HrAdmin, Route::HrDashboard),
        RouteDecision::Render(View::HrDashboard)
    );
    assert_eq!(
        decide(AuthView::Unauthenticated, Route::HrDashboard),
        RouteDecision::Redirect(ROOT)
    );
    assert_eq!(
        decide(AuthView::Employee, Route::HrDashboard),
        RouteDecision::Redirect(ROOT)
    );
}

#[test]
fn unknown_paths_always_redirect_to_root() {
    for auth in [AuthView::Unauthenticated, AuthView::Employee, AuthView::HrAdmin] {
        assert_eq!(decide(auth, Route::Other), RouteDecision::Redirect(ROOT));
    }
}

#[test]
fn loading_holds_every_route() {
    for route in [
        Route::Root,
        Route::ForgotPassword,
        Route::EmployeeDashboard,
        Route::HrDashboard,
        Route::Other,
    ] {
        assert_eq!(decide(AuthView::Loading, route), RouteDecision::Hold);
    }
}

// =============================================================
// End-to-end scenarios through SessionState
// =============================================================

#[test]
fn admin_login_then_root_redirects_to_hr_dashboard() {
    let mut state = SessionState::default();
    state.login(
        User {
            email: "admin@priacc.com".to_owned(),
            employee_id: "PRI-001".to_owned(),
            full_name: "Admin".to_owned(),
            role: Role::HrAdmin,
            ..User::default()
        },
        "tok1".to_owned(),
    );
    assert_eq!(
        decide(state.auth_view(), Route::parse("/")),
        RouteDecision::Redirect(HR_DASHBOARD)
    );
}

#[test]
fn employee_cannot_reach_forgot_password() {
    let mut state = SessionState::default();
    state.restore(
        Some("tok1".to_owned()),
        Some(User {
            email: "dev@priacc.com".to_owned(),
            employee_id: "PRI-042".to_owned(),
            full_name: "Dev Example".to_owned(),
            role: Role::Employee,
            ..User::default()
        }),
    );
    assert_eq!(
        decide(state.auth_view(), Route::parse("/forgot-password")),
        RouteDecision::Redirect(ROOT)
    );
}

#[test]
fn teardown_after_auth_failure_leaves_guard_unauthenticated() {
    let mut state = SessionState::default();
    state.login(
        User {
            role: Role::Employee,
            ..User::default()
        },
        "tok1".to_owned(),
    );

    // What the 401 interceptor does to the session.
    state.logout();

    assert_eq!(
        decide(state.auth_view(), Route::parse("/employee-dashboard")),
        RouteDecision::Redirect(ROOT)
    );
    assert_eq!(
        decide(state.auth_view(), Route::parse("/")),
        RouteDecision::Render(View::Login)
    );
}
