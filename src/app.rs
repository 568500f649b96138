//! Root application component with routing, session context, and the
//! route-guard wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::spinner::Spinner;
use crate::pages::employee_dashboard::EmployeeDashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::hr_dashboard::HrDashboardPage;
use crate::pages::login::LoginPage;
use crate::routing::guard::{self, RouteDecision, View};
use crate::state::session::SessionState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, restores the persisted session once on the
/// client, and routes every path through the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Read the persisted session exactly once on the client. Until this runs
    // the guard holds every route, so a reload never flashes the login page.
    Effect::new(move || {
        let token = storage::read_token();
        let user = storage::read_user();
        session.update(|s| s.restore(token, user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/attendance-portal.css"/>
        <Title text="Attendance Portal"/>

        <Router>
            <Routes fallback=|| view! { <Guarded route=guard::Route::Other/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded route=guard::Route::Root/> }
                />
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <Guarded route=guard::Route::ForgotPassword/> }
                />
                <Route
                    path=StaticSegment("employee-dashboard")
                    view=|| view! { <Guarded route=guard::Route::EmployeeDashboard/> }
                />
                <Route
                    path=StaticSegment("hr-dashboard")
                    view=|| view! { <Guarded route=guard::Route::HrDashboard/> }
                />
            </Routes>
        </Router>
    }
}

/// Re-evaluates the guard for one route on every session change and renders
/// the view, a redirect, or the neutral hold.
#[component]
fn Guarded(route: guard::Route) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match guard::decide(session.get().auth_view(), route) {
        RouteDecision::Hold => view! { <Spinner/> }.into_any(),
        RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        RouteDecision::Render(View::Login) => view! { <LoginPage/> }.into_any(),
        RouteDecision::Render(View::ForgotPassword) => view! { <ForgotPasswordPage/> }.into_any(),
        RouteDecision::Render(View::EmployeeDashboard) => {
            view! { <EmployeeDashboardPage/> }.into_any()
        }
        RouteDecision::Render(View::HrDashboard) => view! { <HrDashboardPage/> }.into_any(),
    }
}
