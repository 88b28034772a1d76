//! Status badge pill.

use leptos::prelude::*;

/// A small colored pill; `class` picks the accent
/// (`badge--success`, `badge--warning`, `badge--danger`, `badge--info`,
/// `badge--muted`).
#[component]
pub fn Badge(#[prop(into)] label: String, class: &'static str) -> impl IntoView {
    view! { <span class=format!("badge {class}")>{label}</span> }
}
