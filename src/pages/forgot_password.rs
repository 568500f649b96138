//! Two-step password recovery: request an OTP by email, then submit the OTP
//! with a new password. After a successful reset the page waits briefly so
//! the confirmation is readable, then returns to login.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::{ErrorAlert, SuccessAlert};

/// Which half of the recovery flow is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Step {
    #[default]
    RequestOtp,
    ResetPassword,
}

const MIN_PASSWORD_LEN: usize = 6;

/// Password recovery page, reachable only while logged out.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let step = RwSignal::new(Step::default());
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let send_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let address = email.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::forgot_password(&address).await {
                    Ok(_) => {
                        success.set("OTP sent to your email. Please check your inbox.".to_owned());
                        step.set(Step::ResetPassword);
                    }
                    Err(err) => error.set(err.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        pending.set(false);
    };

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // Callback rather than a plain closure: the Show fallback re-runs, and
    // the captured navigate handle is not Copy.
    let reset = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        let password = new_password.get_untracked();
        if password != confirm_password.get_untracked() {
            error.set("Passwords do not match".to_owned());
            return;
        }
        if password.len() < MIN_PASSWORD_LEN {
            error.set(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let payload = crate::net::types::PasswordReset {
                email: email.get_untracked(),
                otp: otp.get_untracked(),
                new_password: password,
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&payload).await {
                    Ok(_) => {
                        success.set("Password reset successfully! Redirecting to login...".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(err.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        pending.set(false);
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">
                    {move || match step.get() {
                        Step::RequestOtp => "Enter your email to receive OTP",
                        Step::ResetPassword => "Enter OTP and new password",
                    }}
                </p>

                <ErrorAlert message=error.into()/>
                <SuccessAlert message=success.into()/>

                <Show
                    when=move || step.get() == Step::RequestOtp
                    fallback=move || {
                        view! {
                            <form on:submit=move |ev| reset.run(ev) class="auth-form">
                                <label class="auth-form__label">
                                    "OTP Code"
                                    <input
                                        type="text"
                                        prop:value=move || otp.get()
                                        on:input=move |ev| otp.set(event_target_value(&ev))
                                        placeholder="Enter 6-digit OTP"
                                        required
                                        data-testid="otp-input"
                                    />
                                </label>
                                <label class="auth-form__label">
                                    "New Password"
                                    <input
                                        type="password"
                                        prop:value=move || new_password.get()
                                        on:input=move |ev| new_password.set(event_target_value(&ev))
                                        placeholder="Enter new password"
                                        required
                                        data-testid="new-password-input"
                                    />
                                </label>
                                <label class="auth-form__label">
                                    "Confirm Password"
                                    <input
                                        type="password"
                                        prop:value=move || confirm_password.get()
                                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                        placeholder="Confirm new password"
                                        required
                                        data-testid="confirm-password-input"
                                    />
                                </label>
                                <button
                                    type="submit"
                                    class="btn btn--primary btn--block"
                                    disabled=move || pending.get()
                                    data-testid="reset-password-button"
                                >
                                    {move || if pending.get() { "Resetting..." } else { "Reset Password" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form on:submit=send_otp class="auth-form">
                        <label class="auth-form__label">
                            "Email Address"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                placeholder="Enter your email"
                                required
                                data-testid="forgot-password-email-input"
                            />
                        </label>
                        <button
                            type="submit"
                            class="btn btn--primary btn--block"
                            disabled=move || pending.get()
                            data-testid="send-otp-button"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send OTP" }}
                        </button>
                    </form>
                </Show>

                <div class="auth-card__footer">
                    <A href="/" attr:data-testid="back-to-login-link">
                        "Back to Login"
                    </A>
                </div>
            </div>
        </div>
    }
}
