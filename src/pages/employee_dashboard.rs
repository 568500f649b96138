//! Employee dashboard: today's status, photo check-in/out, leave requests,
//! holiday calendar, and profile.
//!
//! Every data fetch snapshots the session epoch when issued and drops its
//! result if a login/logout happened in the meantime, so a slow response can
//! never repopulate a dashboard that no longer belongs to that session.

use leptos::prelude::*;

use crate::components::alert::{ErrorAlert, SuccessAlert};
use crate::components::photo_capture::PhotoCapture;
use crate::components::spinner::Spinner;
use crate::components::tab_button::TabButton;
use crate::net::types::{Attendance, Holiday, Leave, TodayAttendance, User};
use crate::state::session::SessionState;
use crate::state::ui::EmployeeTab;
use crate::util::format;
use crate::util::storage;

/// Leave categories the backend accepts.
pub const LEAVE_TYPES: [&str; 7] = [
    "sick",
    "casual",
    "earned",
    "wfh",
    "maternity",
    "paternity",
    "emergency",
];

/// Employee portal shell: header, tab bar, and the active tab's content.
#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let active_tab = RwSignal::new(EmployeeTab::default());
    let today = RwSignal::new(None::<TodayAttendance>);

    let refresh_today = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_today().await {
                    Ok(t) => {
                        if session.get_untracked().is_current(issued) {
                            today.set(Some(t));
                        }
                    }
                    Err(err) => {
                        leptos::logging::warn!("today attendance fetch failed: {err}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    });

    Effect::new(move || refresh_today.run(()));

    let user = Memo::new(move |_| session.get().user().cloned().unwrap_or_default());
    let logout = move |_| {
        storage::clear_session();
        session.update(SessionState::logout);
    };

    view! {
        <div class="portal">
            <header class="portal__header">
                <div>
                    <h1>"Employee Portal"</h1>
                    <p class="portal__welcome">
                        {move || format!("Welcome, {}", user.get().full_name)}
                    </p>
                </div>
                <button class="btn btn--danger" on:click=logout data-testid="logout-button">
                    "Logout"
                </button>
            </header>

            <nav class="portal__tabs">
                {EmployeeTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let active = Signal::derive(move || active_tab.get() == tab);
                        let on_select = Callback::new(move |()| active_tab.set(tab));
                        view! { <TabButton label=tab.label() active=active on_select=on_select/> }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <main class="portal__content">
                {move || match active_tab.get() {
                    EmployeeTab::Home => {
                        view! { <HomeTab user=user today=today/> }.into_any()
                    }
                    EmployeeTab::Attendance => {
                        view! { <AttendanceTab today=today refresh_today=refresh_today/> }
                            .into_any()
                    }
                    EmployeeTab::Leaves => view! { <LeavesTab/> }.into_any(),
                    EmployeeTab::Holidays => view! { <HolidaysTab/> }.into_any(),
                    EmployeeTab::Profile => view! { <ProfileTab user=user/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Today's check-in/out summary plus the employee's basic record.
#[component]
fn HomeTab(user: Memo<User>, today: RwSignal<Option<TodayAttendance>>) -> impl IntoView {
    let check_in = move || {
        today.get().map_or_else(
            || "Not checked in".to_owned(),
            |t| {
                let at = t.attendance.as_ref().map(|a| a.check_in_time.clone());
                format::clock_or(at.as_deref(), "Not checked in")
            },
        )
    };
    let check_out = move || {
        today.get().map_or_else(
            || "Not checked out".to_owned(),
            |t| {
                let at = t.attendance.and_then(|a| a.check_out_time);
                format::clock_or(at.as_deref(), "Not checked out")
            },
        )
    };
    let hours = move || {
        let total = today.get().and_then(|t| t.attendance.and_then(|a| a.total_hours));
        format::hours_label(total)
    };

    view! {
        <div class="home-tab" data-testid="home-tab">
            <h2>"Dashboard"</h2>
            <div class="today-card">
                <h3>"Today Status"</h3>
                <div class="today-card__grid">
                    <div>
                        <p class="today-card__label">"Check-In"</p>
                        <p class="today-card__value" data-testid="home-checkin-status">
                            {check_in}
                        </p>
                    </div>
                    <div>
                        <p class="today-card__label">"Check-Out"</p>
                        <p class="today-card__value" data-testid="home-checkout-status">
                            {check_out}
                        </p>
                    </div>
                    <div>
                        <p class="today-card__label">"Total Hours"</p>
                        <p class="today-card__value" data-testid="home-total-hours">{hours}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <h3>"Employee Info"</h3>
                <dl class="info-list">
                    <dt>"Employee ID:"</dt>
                    <dd data-testid="employee-id">{move || user.get().employee_id}</dd>
                    <dt>"Email:"</dt>
                    <dd data-testid="employee-email">{move || user.get().email}</dd>
                    <dt>"Domain:"</dt>
                    <dd data-testid="employee-domain">
                        {move || user.get().domain.unwrap_or_else(|| "N/A".to_owned())}
                    </dd>
                </dl>
            </div>
        </div>
    }
}

/// Photo check-in/out plus the employee's attendance history.
#[component]
fn AttendanceTab(
    today: RwSignal<Option<TodayAttendance>>,
    refresh_today: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let captured = RwSignal::new(None::<String>);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let history = RwSignal::new(Vec::<Attendance>::new());

    // Checked in but not yet out → the photo flow targets check-out.
    let checked_in = move || today.get().is_some_and(|t| t.is_checked_in());
    let checked_out = move || today.get().is_some_and(|t| t.is_checked_out());

    let load_history = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_my_history(None, None).await {
                    Ok(list) => {
                        if session.get_untracked().is_current(issued) {
                            history.set(list.attendance);
                        }
                    }
                    Err(err) => leptos::logging::warn!("history fetch failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    });
    Effect::new(move || load_history.run(()));

    let submit_photo = Callback::new(move |()| {
        let Some(data_url) = captured.get_untracked() else {
            error.set("Please capture your photo first".to_owned());
            return;
        };
        error.set(String::new());
        success.set(String::new());
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let checking_out = checked_in();
            leptos::task::spawn_local(async move {
                let photo = format::data_url_payload(&data_url);
                let result = if checking_out {
                    crate::net::api::check_out(photo).await
                } else {
                    crate::net::api::check_in(photo).await
                };
                match result {
                    Ok(ack) => {
                        success.set(ack.message);
                        captured.set(None);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        refresh_today.run(());
                        load_history.run(());
                    }
                    Err(err) => error.set(err.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (data_url, refresh_today);
            pending.set(false);
        }
    });

    view! {
        <div class="attendance-tab">
            <h2>"Attendance"</h2>
            <ErrorAlert message=error.into()/>
            <SuccessAlert message=success.into()/>

            <Show
                when=move || !checked_out()
                fallback=|| {
                    view! {
                        <div class="card card--done">
                            <h3>"Day Complete"</h3>
                            <p>"You have checked out for today."</p>
                        </div>
                    }
                }
            >
                <div class="card">
                    <h3>
                        {move || if checked_in() { "Check Out" } else { "Check In" }}
                    </h3>
                    <PhotoCapture captured=captured/>
                    <Show when=move || captured.get().is_some()>
                        <button
                            class="btn btn--primary btn--block"
                            disabled=move || pending.get()
                            on:click=move |_| submit_photo.run(())
                            data-testid="confirm-attendance-button"
                        >
                            {move || {
                                match (pending.get(), checked_in()) {
                                    (true, _) => "Submitting...",
                                    (false, true) => "Confirm Check Out",
                                    (false, false) => "Confirm Check In",
                                }
                            }}
                        </button>
                    </Show>
                </div>
            </Show>

            <div class="card">
                <h3>"My History"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Check-In"</th>
                            <th>"Check-Out"</th>
                            <th>"Hours"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || history.get() key=|a| a.id.clone() let:record>
                            <tr>
                                <td>{record.date.clone()}</td>
                                <td>{format::clock_time(&record.check_in_time)}</td>
                                <td>{format::clock_or(record.check_out_time.as_deref(), "-")}</td>
                                <td>{format::hours_label(record.total_hours)}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Leave application form and the employee's leave history.
#[component]
fn LeavesTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let leaves = RwSignal::new(Vec::<Leave>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let leave_type = RwSignal::new("sick".to_owned());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_my_leaves().await {
                    Ok(list) => {
                        if session.get_untracked().is_current(issued) {
                            leaves.set(list.leaves);
                        }
                    }
                    Err(err) => leptos::logging::warn!("leave fetch failed: {err}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            loading.set(false);
        }
    });
    Effect::new(move || load.run(()));

    let apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let payload = crate::net::types::LeaveApplication {
                leave_type: leave_type.get_untracked(),
                start_date: start_date.get_untracked(),
                end_date: end_date.get_untracked(),
                reason: reason.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::apply_leave(&payload).await {
                    Ok(ack) => {
                        success.set(ack.message);
                        reason.set(String::new());
                        load.run(());
                    }
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
    };

    view! {
        <div class="leaves-tab">
            <h2>"Leaves"</h2>
            <ErrorAlert message=error.into()/>
            <SuccessAlert message=success.into()/>

            <div class="card">
                <h3>"Apply for Leave"</h3>
                <form on:submit=apply class="form-grid">
                    <label>
                        "Leave Type"
                        <select
                            prop:value=move || leave_type.get()
                            on:change=move |ev| leave_type.set(event_target_value(&ev))
                            data-testid="leave-type-select"
                        >
                            {LEAVE_TYPES
                                .into_iter()
                                .map(|t| view! { <option value=t>{t}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>
                        "Start Date"
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "End Date"
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Reason"
                        <input
                            type="text"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <button type="submit" class="btn btn--primary" data-testid="apply-leave-button">
                        "Apply"
                    </button>
                </form>
            </div>

            <div class="card">
                <h3>"My Leave Requests"</h3>
                <Show when=move || !loading.get() fallback=Spinner>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"From"</th>
                                <th>"To"</th>
                                <th>"Days"</th>
                                <th>"Applied"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || leaves.get() key=|l| l.id.clone() let:leave>
                                <tr>
                                    <td>{leave.leave_type.clone()}</td>
                                    <td>{leave.start_date.clone()}</td>
                                    <td>{leave.end_date.clone()}</td>
                                    <td>{leave.days_count}</td>
                                    <td>{format::date_part(&leave.applied_on).to_owned()}</td>
                                    <td class=format!("leave-status leave-status--{}", leave.status)>
                                        {leave.status.clone()}
                                    </td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

/// Company holiday calendar, read-only for employees.
#[component]
fn HolidaysTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let holidays = RwSignal::new(Vec::<Holiday>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_holidays(None).await {
                    Ok(list) => {
                        if session.get_untracked().is_current(issued) {
                            holidays.set(list.holidays);
                        }
                    }
                    Err(err) => leptos::logging::warn!("holiday fetch failed: {err}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            loading.set(false);
        }
    });

    view! {
        <div class="holidays-tab">
            <h2>"Company Holidays"</h2>
            <div class="card">
                <Show when=move || !loading.get() fallback=Spinner>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Name"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || holidays.get() key=|h| h.id.clone() let:holiday>
                                <tr>
                                    <td>{holiday.date.clone()}</td>
                                    <td>{holiday.name.clone()}</td>
                                    <td>{holiday.description.clone().unwrap_or_default()}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

/// Read-only personal record plus a change-password form.
#[component]
fn ProfileTab(user: Memo<User>) -> impl IntoView {
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let change = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let payload = crate::net::types::PasswordChange {
                old_password: old_password.get_untracked(),
                new_password: new_password.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::change_password(&payload).await {
                    Ok(ack) => {
                        success.set(ack.message);
                        old_password.set(String::new());
                        new_password.set(String::new());
                    }
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
    };

    view! {
        <div class="profile-tab">
            <h2>"Profile"</h2>
            <div class="card">
                <h3>"Personal Information"</h3>
                <dl class="info-list">
                    <dt>"Full Name"</dt>
                    <dd>{move || user.get().full_name}</dd>
                    <dt>"Employee ID"</dt>
                    <dd>{move || user.get().employee_id}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || user.get().email}</dd>
                    <dt>"Domain"</dt>
                    <dd>{move || user.get().domain.unwrap_or_else(|| "N/A".to_owned())}</dd>
                    <dt>"Joining Date"</dt>
                    <dd>{move || user.get().joining_date.unwrap_or_else(|| "N/A".to_owned())}</dd>
                </dl>
            </div>

            <div class="card">
                <h3>"Change Password"</h3>
                <ErrorAlert message=error.into()/>
                <SuccessAlert message=success.into()/>
                <form on:submit=change class="form-grid">
                    <label>
                        "Current Password"
                        <input
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "New Password"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <button type="submit" class="btn btn--primary">
                        "Update Password"
                    </button>
                </form>
            </div>
        </div>
    }
}
