use leptos::prelude::*;

/// Centered loading spinner, used as the neutral render while the session
/// restores and while tab data loads.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}
