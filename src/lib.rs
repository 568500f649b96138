//! # attendance-portal
//!
//! Leptos + WASM frontend for an HR/attendance portal: employee login,
//! photo-based check-in/out, leave requests and approvals, holiday
//! calendars, and an HR admin console. All business rules live behind the
//! REST API; this crate is views, form state, and a thin client with a
//! role-based route guard.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Client entry point: wires up panic/log output and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
