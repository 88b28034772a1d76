//! "No records" card, distinct from the loading placeholder.

use leptos::prelude::*;

/// Centered empty-collection card with a glyph, title, and explanatory copy.
#[component]
pub fn EmptyState(
    glyph: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] detail: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__glyph" aria-hidden="true">{glyph}</span>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__detail">{detail}</p>
        </div>
    }
}
