//! Dashboard landing page: aggregate counters and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the aggregate
//! counters once on mount; a failed fetch falls back to zeroed counters plus
//! one notice, keeping the page usable.

use leptos::prelude::*;
use leptos_router::components::A;
use records::DashboardStats;

use crate::components::stat_card::StatCard;
#[cfg(feature = "hydrate")]
use crate::state::notify::{self, NoticeState};
use crate::util::format::format_int_pt_br;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);

    #[cfg(feature = "hydrate")]
    {
        let notices = expect_context::<RwSignal<NoticeState>>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_dashboard_stats().await {
                Ok(counters) => stats.set(Some(counters)),
                Err(err) => {
                    log::warn!("dashboard stats load failed: {err}");
                    notify::push_transient(
                        notices,
                        "Erro ao carregar dados",
                        "Não foi possível carregar os dados do dashboard.",
                    );
                    stats.set(Some(DashboardStats::default()));
                }
            }
        });
    }

    view! {
        <Show
            when=move || stats.get().is_some()
            fallback=move || {
                view! {
                    <div class="page-loading">
                        <div class="page-loading__spinner" aria-hidden="true"></div>
                        <p>"Carregando dashboard..."</p>
                    </div>
                }
            }
        >
            <div class="page">
                <section class="hero">
                    <span class="hero__glyph" aria-hidden="true">"▦"</span>
                    <h1 class="hero__title">"Sistema de Gestão de Manutenção Predial"</h1>
                    <p class="hero__subtitle">
                        "Controle centralizado da manutenção dos imóveis da Polícia Rodoviária Federal"
                    </p>
                </section>

                <div class="page__toolbar page__toolbar--stats">
                    {move || {
                        let counters = stats.get().unwrap_or_default();
                        view! {
                            <StatCard
                                value=format_int_pt_br(counters.properties)
                                label="Imóveis"
                                glyph="⌂"
                            />
                            <StatCard
                                value=format_int_pt_br(counters.maintenance_requests)
                                label="Manutenções"
                                glyph="🔧"
                            />
                            <StatCard
                                value=format_int_pt_br(counters.companies)
                                label="Empresas"
                                glyph="👥"
                            />
                            <StatCard
                                value=format_int_pt_br(counters.pending_requests)
                                label="Pendentes"
                                glyph="🕐"
                                accent="stat-card__value--warning"
                            />
                        }
                    }}
                </div>

                <div class="card-grid">
                    <div class="card">
                        <h3 class="card__title">"Gestão de Imóveis"</h3>
                        <p class="card__line">"Visualizar e gerenciar todos os imóveis da PRF"</p>
                        <A href="/properties" attr:class="btn btn--primary">
                            "Acessar Imóveis"
                        </A>
                    </div>
                    <div class="card">
                        <h3 class="card__title">"Solicitações"</h3>
                        <p class="card__line">"Acompanhar status das manutenções"</p>
                        <A href="/maintenance" attr:class="btn btn--primary">
                            "Ver Manutenções"
                        </A>
                    </div>
                    <div class="card">
                        <h3 class="card__title">"Empresas"</h3>
                        <p class="card__line">"Gerenciar empresas prestadoras de serviço"</p>
                        <A href="/companies" attr:class="btn btn--primary">
                            "Ver Empresas"
                        </A>
                    </div>
                </div>
            </div>
        </Show>
    }
}
