//! Sidebar navigation with active-route highlighting.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Main navigation entries: label, target route, glyph.
const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("Dashboard", "/", "▦"),
    ("Imóveis", "/properties", "⌂"),
    ("Manutenções", "/maintenance", "🔧"),
    ("Empresas", "/companies", "👥"),
];

/// Active-route test: the dashboard matches only exactly, every other entry
/// matches itself and its sub-paths.
#[must_use]
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    if item_path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(item_path)
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">
                <span class="sidebar__logo-mark" aria-hidden="true">"🛡"</span>
                <div>
                    <span class="sidebar__logo-title">"PRF"</span>
                    <span class="sidebar__logo-subtitle">"Gestão Predial"</span>
                </div>
            </div>

            <nav class="sidebar__nav">
                <span class="sidebar__nav-label">"Principal"</span>
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, href, glyph)| {
                        let path = location.pathname;
                        view! {
                            <A
                                href=href
                                attr:class=move || {
                                    if is_active(href, &path.get()) {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                }
                            >
                                <span class="sidebar__link-glyph" aria-hidden="true">{glyph}</span>
                                <span>{label}</span>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
