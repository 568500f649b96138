//! Login page: email/employee-id and password form.
//!
//! On success the session signal is updated and the route guard takes over;
//! no navigation happens here. Failures render inline.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::ErrorAlert;
use crate::state::session::SessionState;

/// Login form for both employees and HR admins.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(String::new());
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let user_input = username.get_untracked();
            let pass_input = password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user_input, &pass_input).await {
                    Ok(resp) => {
                        crate::util::storage::write_session(&resp.access_token, &resp.user);
                        session.update(|s| s.login(resp.user, resp.access_token));
                    }
                    Err(err) => error.set(err.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Attendance Portal"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>

                <ErrorAlert message=error.into()/>

                <form on:submit=submit class="auth-form">
                    <label class="auth-form__label">
                        "Email or Employee ID"
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            placeholder="Enter email or employee ID"
                            required
                            data-testid="login-username-input"
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            placeholder="Enter password"
                            required
                            data-testid="login-password-input"
                        />
                    </label>

                    <div class="auth-form__links">
                        <A href="/forgot-password" attr:data-testid="forgot-password-link">
                            "Forgot Password?"
                        </A>
                    </div>

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        disabled=move || pending.get()
                        data-testid="login-submit-button"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
