//! Properties page: searchable card grid of managed buildings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Instantiates the list-view state bound to the `properties` collection:
//! one fetch on mount ordered by unit name, client-side substring filter
//! over name, managing unit, and address.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use leptos::prelude::*;
use records::{Conservation, Property, PropertySituation};

use crate::components::badge::Badge;
use crate::components::empty_state::EmptyState;
use crate::components::stat_card::StatCard;
use crate::state::list_view::{Filterable, ListView};
#[cfg(feature = "hydrate")]
use crate::state::notify::{self, NoticeState};
use crate::util::format::format_area_m2;

impl Filterable for Property {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.nome_unidade, &self.unidade_gestora, &self.endereco]
    }
}

/// Badge accent for the occupancy situation.
#[must_use]
pub fn situation_badge_class(situacao: PropertySituation) -> &'static str {
    match situacao {
        PropertySituation::Ativo => "badge--success",
        PropertySituation::Inativo => "badge--danger",
        PropertySituation::EmReforma => "badge--warning",
    }
}

/// Badge accent for the conservation grade.
#[must_use]
pub fn conservation_badge_class(grade: Conservation) -> &'static str {
    match grade {
        Conservation::Otimo | Conservation::Bom => "badge--success",
        Conservation::Regular => "badge--warning",
        Conservation::Ruim | Conservation::Critico => "badge--danger",
    }
}

/// How many properties are currently in use.
#[must_use]
pub fn in_use_count(items: &[Property]) -> usize {
    items
        .iter()
        .filter(|p| p.situacao == PropertySituation::Ativo)
        .count()
}

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let listing = RwSignal::new(ListView::<Property>::new());

    #[cfg(feature = "hydrate")]
    {
        let notices = expect_context::<RwSignal<NoticeState>>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_properties().await {
                Ok(rows) => listing.update(|l| l.finish_load(rows)),
                Err(err) => {
                    log::warn!("properties load failed: {err}");
                    listing.update(|l| l.fail_load());
                    notify::push_transient(
                        notices,
                        "Erro ao carregar imóveis",
                        "Não foi possível carregar a lista de imóveis.",
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
                        <p>"Carregando imóveis..."</p>
                    </div>
                }
            }
        >
            <div class="page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Gestão de Imóveis"</h1>
                        <p class="page__subtitle">
                            "Gerenciar e monitorar todos os imóveis da Polícia Rodoviária Federal"
                        </p>
                    </div>
                    <div class="page__actions">
                        <button class="btn">"Filtros"</button>
                        <button class="btn">"Exportar"</button>
                    </div>
                </header>

                <div class="page__toolbar">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Buscar por nome, unidade ou endereço..."
                        prop:value=move || listing.get().term
                        on:input=move |ev| {
                            listing.update(|l| l.set_term(event_target_value(&ev)));
                        }
                    />
                    {move || {
                        let items = listing.get().items;
                        view! {
                            <StatCard value=items.len().to_string() label="Total de Imóveis"/>
                            <StatCard
                                value=in_use_count(&items).to_string()
                                label="Em Uso"
                                accent="stat-card__value--success"
                            />
                        }
                    }}
                </div>

                <div class="card-grid">
                    {move || {
                        listing
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|property| view! { <PropertyCard property=property/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || !listing.get().is_loading() && listing.get().filtered().is_empty()>
                    {move || {
                        let detail = if listing.get().term.is_empty() {
                            "Nenhum imóvel cadastrado no sistema."
                        } else {
                            "Tente ajustar os termos de busca ou limpar os filtros."
                        };
                        view! {
                            <EmptyState glyph="⌂" title="Nenhum imóvel encontrado" detail=detail/>
                        }
                    }}
                </Show>
            </div>
        </Show>
    }
}

/// A single property card.
#[component]
fn PropertyCard(property: Property) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{property.nome_unidade.clone()}</h3>
                <Badge
                    label=property.situacao.label()
                    class=situation_badge_class(property.situacao)
                />
            </div>
            <p class="card__subtitle">{property.unidade_gestora.clone()}</p>

            <div class="card__body">
                <p class="card__line">
                    <span class="card__line-glyph" aria-hidden="true">"📍"</span>
                    {property.endereco.clone()}
                </p>
                <p class="card__line">{property.tipo_imovel.label()}</p>
                {property
                    .area_construida_m2
                    .map(|area| view! { <p class="card__line">{format!("Área: {}", format_area_m2(area))}</p> })}
                {property
                    .estado_conservacao
                    .map(|grade| {
                        view! { <Badge label=grade.label() class=conservation_badge_class(grade)/> }
                    })}
            </div>

            <div class="card__actions">
                <button class="btn">"Ver Detalhes"</button>
                <button class="btn btn--primary">"Manutenção"</button>
            </div>
        </div>
    }
}
