//! Application root: document shell, router, and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` renders the HTML document for SSR; `App` mounts the router and
//! provides the auth session and the notice queue through context, so no
//! page reaches for ambient globals.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::Layout;
use crate::pages::auth::AuthPage;
use crate::pages::companies::CompaniesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::maintenance::MaintenancePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::properties::PropertiesPage;
use crate::state::auth::AuthState;
use crate::state::notify::NoticeState;

/// HTML document shell used by the server for SSR output.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::probing());
    let notices = RwSignal::new(NoticeState::default());
    provide_context(auth);
    provide_context(notices);

    // One session probe per page load; every route gate waits on it.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.finish_probe(user));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/client.css"/>
        <Title text="Gestão Predial PRF"/>
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/auth") view=AuthPage/>
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("properties") view=PropertiesPage/>
                    <Route path=path!("maintenance") view=MaintenancePage/>
                    <Route path=path!("companies") view=CompaniesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
