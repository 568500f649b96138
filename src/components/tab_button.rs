use leptos::prelude::*;

/// One entry in a dashboard tab bar.
#[component]
pub fn TabButton(
    label: &'static str,
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            "tab-button tab-button--active"
        } else {
            "tab-button"
        }
    };

    view! {
        <button
            class=class
            on:click=move |_| on_select.run(())
            data-testid=format!("nav-{}", label.to_lowercase())
        >
            {label}
        </button>
    }
}
