//! Authenticated shell: sidebar + top bar around the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the gate for every protected route. While the session probe is in
//! flight it shows a splash; once settled without a user it redirects to
//! `/auth` and never renders the outlet, so protected pages cannot mount and
//! therefore cannot issue their collection fetch without a session.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::notices::NoticeHost;
use crate::components::sidebar::AppSidebar;
use crate::components::top_nav::TopNav;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn Layout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="splash">
                        <div class="splash__card">
                            <div class="splash__spinner" aria-hidden="true"></div>
                            <p>
                                {move || {
                                    if auth.get().loading { "Carregando..." } else { "Redirecionando para o login..." }
                                }}
                            </p>
                        </div>
                    </div>
                }
            }
        >
            <div class="shell">
                <AppSidebar/>
                <div class="shell__main">
                    <TopNav/>
                    <main class="shell__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
        <NoticeHost/>
    }
}
