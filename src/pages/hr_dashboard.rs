//! HR admin console: stats overview, employee CRUD, today's attendance
//! console with manual marking, leave approvals, and holiday management.

use leptos::prelude::*;

use crate::components::alert::{ErrorAlert, SuccessAlert};
use crate::components::spinner::Spinner;
use crate::components::stat_card::StatCard;
use crate::components::tab_button::TabButton;
use crate::net::api::MarkAction;
use crate::net::types::{EmployeeDayStatus, Holiday, Leave, User};
use crate::state::session::SessionState;
use crate::state::ui::HrTab;
use crate::util::format;
use crate::util::storage;

/// HR portal shell: header, tab bar, and the active tab's content.
#[component]
pub fn HrDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let active_tab = RwSignal::new(HrTab::default());

    let user = Memo::new(move |_| session.get().user().cloned().unwrap_or_default());
    let logout = move |_| {
        storage::clear_session();
        session.update(SessionState::logout);
    };

    view! {
        <div class="portal">
            <header class="portal__header">
                <div>
                    <h1>"HR Admin Portal"</h1>
                    <p class="portal__welcome">
                        {move || format!("Welcome, {}", user.get().full_name)}
                    </p>
                </div>
                <button class="btn btn--danger" on:click=logout data-testid="logout-button">
                    "Logout"
                </button>
            </header>

            <nav class="portal__tabs">
                {HrTab::ALL
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
                    HrTab::Dashboard => view! { <StatsTab/> }.into_any(),
                    HrTab::Employees => view! { <EmployeesTab/> }.into_any(),
                    HrTab::Attendance => view! { <AttendanceConsoleTab/> }.into_any(),
                    HrTab::Leaves => view! { <LeaveApprovalsTab/> }.into_any(),
                    HrTab::Holidays => view! { <HolidaysAdminTab/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Headline numbers plus per-domain headcount.
#[component]
fn StatsTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let stats = RwSignal::new(None::<crate::net::types::DashboardStats>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_stats().await {
                    Ok(s) => {
                        if session.get_untracked().is_current(issued) {
                            stats.set(Some(s));
                        }
                    }
                    Err(err) => leptos::logging::warn!("stats fetch failed: {err}"),
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
        <div class="stats-tab">
            <h2>"Dashboard Overview"</h2>
            <Show when=move || !loading.get() fallback=Spinner>
                {move || {
                    let s = stats.get().unwrap_or_default();
                    view! {
                        <div class="stats-grid">
                            <StatCard title="Total Employees" value=s.total_employees color="blue"/>
                            <StatCard title="Present Today" value=s.present_today color="green"/>
                            <StatCard title="Absent Today" value=s.absent_today color="red"/>
                            <StatCard title="Pending Leaves" value=s.pending_leaves color="yellow"/>
                        </div>
                        <div class="card">
                            <h3>"Employees by Domain"</h3>
                            <dl class="info-list">
                                {s.domain_counts
                                    .into_iter()
                                    .map(|(domain, count)| {
                                        view! { <dt>{domain}</dt> <dd>{count}</dd> }
                                    })
                                    .collect::<Vec<_>>()}
                            </dl>
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}

/// Employee table with a create modal and per-row removal.
#[component]
fn EmployeesTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let employees = RwSignal::new(Vec::<User>::new());
    let domains = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let show_create = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_employees(None).await {
                    Ok(list) => {
                        if session.get_untracked().is_current(issued) {
                            employees.set(list);
                        }
                    }
                    Err(err) => leptos::logging::warn!("employee fetch failed: {err}"),
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

    // Domains populate the create form's select.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_domains().await {
                    Ok(list) => domains.set(list),
                    Err(err) => leptos::logging::warn!("domain fetch failed: {err}"),
                }
            });
        }
    });

    let remove = Callback::new(move |employee_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_employee(&employee_id).await {
                    Ok(_) => load.run(()),
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = employee_id;
    });

    let on_created = Callback::new(move |()| {
        show_create.set(false);
        load.run(());
    });
    let on_cancel = Callback::new(move |()| show_create.set(false));

    view! {
        <div class="employees-tab">
            <div class="tab-header">
                <h2>"Employee Management"</h2>
                <button
                    class="btn btn--primary"
                    on:click=move |_| show_create.set(true)
                    data-testid="add-employee-button"
                >
                    "+ Add Employee"
                </button>
            </div>

            <ErrorAlert message=error.into()/>

            <div class="card">
                <Show when=move || !loading.get() fallback=Spinner>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Employee ID"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Domain"</th>
                                <th>"Active"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || employees.get() key=|e| e.id.clone() let:emp>
                                <tr>
                                    <td>{emp.employee_id.clone()}</td>
                                    <td>{emp.full_name.clone()}</td>
                                    <td>{emp.email.clone()}</td>
                                    <td>{emp.domain.clone().unwrap_or_else(|| "N/A".to_owned())}</td>
                                    <td>{if emp.is_active { "Yes" } else { "No" }}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger btn--small"
                                            on:click={
                                                let id = emp.id.clone();
                                                move |_| remove.run(id.clone())
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </div>

            <Show when=move || show_create.get()>
                <CreateEmployeeDialog domains=domains on_created=on_created on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Modal form for adding an employee.
#[component]
fn CreateEmployeeDialog(
    domains: RwSignal<Vec<String>>,
    on_created: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let employee_id = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let domain = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let chosen = domain.get_untracked();
            let payload = crate::net::types::NewEmployee {
                email: email.get_untracked(),
                employee_id: employee_id.get_untracked(),
                full_name: full_name.get_untracked(),
                password: password.get_untracked(),
                domain: if chosen.is_empty() { None } else { Some(chosen) },
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_employee(&payload).await {
                    Ok(_) => on_created.run(()),
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = on_created;
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Employee"</h2>
                <ErrorAlert message=error.into()/>
                <form
                    class="form-grid"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label>
                        "Full Name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Employee ID"
                        <input
                            type="text"
                            prop:value=move || employee_id.get()
                            on:input=move |ev| employee_id.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Domain"
                        <select
                            prop:value=move || domain.get()
                            on:change=move |ev| domain.set(event_target_value(&ev))
                        >
                            <option value="">"Unassigned"</option>
                            <For each=move || domains.get() key=Clone::clone let:name>
                                <option value=name.clone()>{name.clone()}</option>
                            </For>
                        </select>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Create Employee"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Today's presence per employee with manual check-in/out marking.
#[component]
fn AttendanceConsoleTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let report_date = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<EmployeeDayStatus>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_employee_status().await {
                    Ok(report) => {
                        if session.get_untracked().is_current(issued) {
                            report_date.set(report.date);
                            rows.set(report.employees);
                        }
                    }
                    Err(err) => leptos::logging::warn!("status fetch failed: {err}"),
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

    let mark = Callback::new(move |(employee_id, action): (String, MarkAction)| {
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::mark_attendance(&employee_id, action).await {
                    Ok(ack) => {
                        success.set(ack.message);
                        load.run(());
                    }
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (employee_id, action);
    });

    view! {
        <div class="attendance-console">
            <div class="tab-header">
                <h2>"Attendance Console"</h2>
                <span class="tab-header__date">{move || report_date.get()}</span>
            </div>

            <ErrorAlert message=error.into()/>
            <SuccessAlert message=success.into()/>

            <div class="card">
                <Show when=move || !loading.get() fallback=Spinner>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Employee"</th>
                                <th>"Domain"</th>
                                <th>"Present"</th>
                                <th>"Check-In"</th>
                                <th>"Check-Out"</th>
                                <th>"Hours"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || rows.get() key=|r| r.employee_id.clone() let:row>
                                <tr>
                                    <td>{row.employee_name.clone()}</td>
                                    <td>{row.domain.clone().unwrap_or_else(|| "N/A".to_owned())}</td>
                                    <td>{if row.is_present { "Yes" } else { "No" }}</td>
                                    <td>{format::clock_or(row.check_in_time.as_deref(), "-")}</td>
                                    <td>{format::clock_or(row.check_out_time.as_deref(), "-")}</td>
                                    <td>{format::hours_label(row.total_hours)}</td>
                                    <td>
                                        {if row.is_present && row.check_out_time.is_none() {
                                            let id = row.employee_id.clone();
                                            view! {
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        mark.run((id.clone(), MarkAction::CheckOut))
                                                    }
                                                >
                                                    "Mark Out"
                                                </button>
                                            }
                                                .into_any()
                                        } else if !row.is_present {
                                            let id = row.employee_id.clone();
                                            view! {
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        mark.run((id.clone(), MarkAction::CheckIn))
                                                    }
                                                >
                                                    "Mark In"
                                                </button>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span class="muted">"Done"</span> }.into_any()
                                        }}
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

/// Leave requests with approve/reject actions and a status filter.
#[component]
fn LeaveApprovalsTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let leaves = RwSignal::new(Vec::<Leave>::new());
    let filter = RwSignal::new("pending".to_owned());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let issued = session.get_untracked().epoch();
            let status = filter.get_untracked();
            leptos::task::spawn_local(async move {
                let status = if status == "all" { None } else { Some(status.as_str()) };
                match crate::net::api::fetch_all_leaves(status).await {
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

    let decide = Callback::new(move |(leave_id, status): (String, &'static str)| {
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_leave_status(&leave_id, status).await {
                    Ok(_) => load.run(()),
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (leave_id, status);
    });

    view! {
        <div class="leave-approvals">
            <div class="tab-header">
                <h2>"Leave Requests"</h2>
                <select
                    prop:value=move || filter.get()
                    on:change=move |ev| {
                        filter.set(event_target_value(&ev));
                        load.run(());
                    }
                    data-testid="leave-filter-select"
                >
                    <option value="pending">"Pending"</option>
                    <option value="approved">"Approved"</option>
                    <option value="rejected">"Rejected"</option>
                    <option value="all">"All"</option>
                </select>
            </div>

            <ErrorAlert message=error.into()/>

            <div class="card">
                <Show when=move || !loading.get() fallback=Spinner>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Employee"</th>
                                <th>"Type"</th>
                                <th>"From"</th>
                                <th>"To"</th>
                                <th>"Days"</th>
                                <th>"Reason"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || leaves.get() key=|l| l.id.clone() let:leave>
                                <tr>
                                    <td>{leave.employee_name.clone()}</td>
                                    <td>{leave.leave_type.clone()}</td>
                                    <td>{leave.start_date.clone()}</td>
                                    <td>{leave.end_date.clone()}</td>
                                    <td>{leave.days_count}</td>
                                    <td>{leave.reason.clone()}</td>
                                    <td class=format!("leave-status leave-status--{}", leave.status)>
                                        {leave.status.clone()}
                                    </td>
                                    <td>
                                        {if leave.status == "pending" {
                                            let approve_id = leave.id.clone();
                                            let reject_id = leave.id.clone();
                                            view! {
                                                <button
                                                    class="btn btn--small btn--primary"
                                                    on:click=move |_| {
                                                        decide.run((approve_id.clone(), "approved"))
                                                    }
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| {
                                                        decide.run((reject_id.clone(), "rejected"))
                                                    }
                                                >
                                                    "Reject"
                                                </button>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span class="muted">"-"</span> }.into_any()
                                        }}
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

/// Holiday creation form plus the calendar with per-row deletion.
#[component]
fn HolidaysAdminTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let holidays = RwSignal::new(Vec::<Holiday>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
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
    Effect::new(move || load.run(()));

    let create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let about = description.get_untracked();
            let payload = crate::net::types::NewHoliday {
                name: name.get_untracked(),
                date: date.get_untracked(),
                description: if about.is_empty() { None } else { Some(about) },
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_holiday(&payload).await {
                    Ok(_) => {
                        name.set(String::new());
                        date.set(String::new());
                        description.set(String::new());
                        load.run(());
                    }
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
    };

    let remove = Callback::new(move |holiday_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_holiday(&holiday_id).await {
                    Ok(_) => load.run(()),
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = holiday_id;
    });

    view! {
        <div class="holidays-admin">
            <h2>"Holiday Management"</h2>
            <ErrorAlert message=error.into()/>

            <div class="card">
                <h3>"Add Holiday"</h3>
                <form on:submit=create class="form-grid">
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Date"
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Description"
                        <input
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn--primary" data-testid="add-holiday-button">
                        "Add"
                    </button>
                </form>
            </div>

            <div class="card">
                <Show when=move || !loading.get() fallback=Spinner>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || holidays.get() key=|h| h.id.clone() let:holiday>
                                <tr>
                                    <td>{holiday.date.clone()}</td>
                                    <td>{holiday.name.clone()}</td>
                                    <td>{holiday.description.clone().unwrap_or_default()}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger btn--small"
                                            on:click={
                                                let id = holiday.id.clone();
                                                move |_| remove.run(id.clone())
                                            }
                                        >
                                            "Delete"
                                        </button>
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
