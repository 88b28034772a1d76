//! Catch-all 404 page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Página não encontrada."</p>
            <A href="/" attr:class="btn btn--primary">
                "Voltar ao Dashboard"
            </A>
        </div>
    }
}
