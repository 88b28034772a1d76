//! Stat card for dashboard and list-page counters.

use leptos::prelude::*;

/// A counter card: big value, small label, optional glyph on the right.
#[component]
pub fn StatCard(
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    #[prop(optional)] glyph: Option<&'static str>,
    #[prop(default = "")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div>
                <div class=format!("stat-card__value {accent}")>{value}</div>
                <div class="stat-card__label">{label}</div>
            </div>
            {glyph.map(|g| view! { <span class="stat-card__glyph" aria-hidden="true">{g}</span> })}
        </div>
    }
}
