use leptos::prelude::*;

/// Colored headline-number card for the HR dashboard overview.
#[component]
pub fn StatCard(title: &'static str, value: i64, color: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{color}")>
            <h3 class="stat-card__title">{title}</h3>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
