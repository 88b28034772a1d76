//! Maintenance page: work-order cards with status tallies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the `maintenance_requests` collection once on mount, newest first,
//! with the property and company summaries embedded for display. Status is
//! display-only; nothing here advances a workflow.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use leptos::prelude::*;
use records::{MaintenanceRequest, MaintenanceStatus};

use crate::components::badge::Badge;
use crate::components::empty_state::EmptyState;
use crate::components::stat_card::StatCard;
use crate::state::list_view::ListView;
#[cfg(feature = "hydrate")]
use crate::state::notify::{self, NoticeState};
use crate::util::format::{format_brl, format_date_br, format_request_code};

/// Badge accent for a workflow status.
#[must_use]
pub fn status_badge_class(status: MaintenanceStatus) -> &'static str {
    match status {
        MaintenanceStatus::Solicitado => "badge--warning",
        MaintenanceStatus::EmAndamento => "badge--info",
        MaintenanceStatus::Concluido => "badge--success",
    }
}

/// Glyph shown inside the status badge.
#[must_use]
pub fn status_glyph(status: MaintenanceStatus) -> &'static str {
    match status {
        MaintenanceStatus::Solicitado => "🕐",
        MaintenanceStatus::EmAndamento => "⚠",
        MaintenanceStatus::Concluido => "✔",
    }
}

/// Per-status counters for the stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Count requests per workflow status.
#[must_use]
pub fn tally(items: &[MaintenanceRequest]) -> StatusTally {
    let mut counts = StatusTally { total: items.len(), ..StatusTally::default() };
    for request in items {
        match request.status {
            MaintenanceStatus::Solicitado => counts.pending += 1,
            MaintenanceStatus::EmAndamento => counts.in_progress += 1,
            MaintenanceStatus::Concluido => counts.completed += 1,
        }
    }
    counts
}

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let listing = RwSignal::new(ListView::<MaintenanceRequest>::new());

    #[cfg(feature = "hydrate")]
    {
        let notices = expect_context::<RwSignal<NoticeState>>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_maintenance_requests().await {
                Ok(rows) => listing.update(|l| l.finish_load(rows)),
                Err(err) => {
                    log::warn!("maintenance load failed: {err}");
                    listing.update(|l| l.fail_load());
                    notify::push_transient(
                        notices,
                        "Erro ao carregar manutenções",
                        "Não foi possível carregar as solicitações de manutenção.",
                    );
                }
            }
        });
    }

    view! {
        <Show
            when=move || !listing.get().is_loading()
            fallback=move || {
                view! {
                    <div class="page-loading">
                        <div class="page-loading__spinner" aria-hidden="true"></div>
                        <p>"Carregando manutenções..."</p>
                    </div>
                }
            }
        >
            <div class="page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Gestão de Manutenção"</h1>
                        <p class="page__subtitle">
                            "Controle e acompanhamento de todas as solicitações de manutenção"
                        </p>
                    </div>
                    <div class="page__actions">
                        <button class="btn">"Filtros"</button>
                        <button class="btn btn--primary">"Nova Solicitação"</button>
                    </div>
                </header>

                <div class="page__toolbar page__toolbar--stats">
                    {move || {
                        let counts = tally(&listing.get().items);
                        view! {
                            <StatCard value=counts.total.to_string() label="Total" glyph="🔧"/>
                            <StatCard
                                value=counts.pending.to_string()
                                label="Pendentes"
                                glyph="🕐"
                                accent="stat-card__value--warning"
                            />
                            <StatCard
                                value=counts.in_progress.to_string()
                                label="Em Andamento"
                                glyph="⚠"
                                accent="stat-card__value--info"
                            />
                            <StatCard
                                value=counts.completed.to_string()
                                label="Concluídas"
                                glyph="✔"
                                accent="stat-card__value--success"
                            />
                        }
                    }}
                </div>

                <div class="card-stack">
                    {move || {
                        listing
                            .get()
                            .items
                            .into_iter()
                            .map(|request| view! { <RequestCard request=request/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || listing.get().settled_empty()>
                    <EmptyState
                        glyph="🔧"
                        title="Nenhuma manutenção encontrada"
                        detail="Não há solicitações de manutenção cadastradas no sistema."
                    />
                </Show>
            </div>
        </Show>
    }
}

/// A single work-order card.
#[component]
fn RequestCard(request: MaintenanceRequest) -> impl IntoView {
    let property_line = request
        .property
        .as_ref()
        .map(|p| format!("{} • {}", p.nome_unidade, p.unidade_gestora));
    let company_name = request.company.as_ref().map(|c| c.name.clone());
    let status_text = format!("{} {}", status_glyph(request.status), request.status.label());

    view! {
        <div class="card card--wide">
            <div class="card__header">
                <div>
                    <div class="card__title-row">
                        <h3 class="card__title">{format_request_code(request.id)}</h3>
                        <Badge label=status_text class=status_badge_class(request.status)/>
                    </div>
                    {property_line.map(|line| view! { <p class="card__subtitle">{line}</p> })}
                </div>
                <div class="card__aside">
                    <span class="card__date">{format_date_br(&request.request_date)}</span>
                    {request
                        .cost
                        .map(|cost| view! { <span class="card__cost">{format_brl(cost)}</span> })}
                </div>
            </div>

            <div class="card__body">
                <p class="card__description">{request.description.clone()}</p>
                {company_name
                    .map(|name| {
                        view! {
                            <p class="card__line">
                                <span class="card__line-label">"Empresa:"</span>
                                <Badge label=name class="badge--muted"/>
                            </p>
                        }
                    })}
            </div>

            <div class="card__actions">
                <button class="btn">"Ver Detalhes"</button>
                <Show when={
                    let status = request.status;
                    move || status != MaintenanceStatus::Concluido
                }>
                    <button class="btn btn--primary">"Atualizar Status"</button>
                </Show>
            </div>
        </div>
    }
}
