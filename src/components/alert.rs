//! Inline banner alerts for per-view error and success messages.

use leptos::prelude::*;

/// Red inline banner; hidden while the message is empty.
#[component]
pub fn ErrorAlert(message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="alert alert--error" data-testid="error-message">
                {move || message.get()}
            </div>
        </Show>
    }
}

/// Green inline banner; hidden while the message is empty.
#[component]
pub fn SuccessAlert(message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="alert alert--success" data-testid="success-message">
                {move || message.get()}
            </div>
        </Show>
    }
}
