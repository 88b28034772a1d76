//! Top bar: system title, notification bell, user menu with sign-out.

#[cfg(test)]
#[path = "top_nav_test.rs"]
mod top_nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Avatar fallback: first letter of the account email, uppercased.
#[must_use]
pub fn user_initial(email: &str) -> String {
    email
        .chars()
        .next()
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn TopNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let role_label = move || auth.get().user.map(|u| u.role.label()).unwrap_or_default();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            auth.update(AuthState::begin_sign_out);
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                auth.update(AuthState::finish_sign_out);
                navigate("/auth", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <header class="topnav">
            <h2 class="topnav__title">"Sistema de Gestão de Manutenção Predial"</h2>

            <div class="topnav__actions">
                <button class="btn topnav__bell" title="Notificações" aria-label="Notificações">
                    "🔔"
                </button>

                <span class="topnav__avatar" aria-hidden="true">
                    {move || user_initial(&email())}
                </span>
                <span class="topnav__identity">
                    {email}
                    <span class="topnav__role">{role_label}</span>
                </span>

                <button class="btn topnav__signout" on:click=on_sign_out title="Sair do Sistema">
                    "Sair"
                </button>
            </div>
        </header>
    }
}
