//! Companies page: searchable cards for outsourced service providers.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use leptos::prelude::*;
use records::Company;

use crate::components::empty_state::EmptyState;
use crate::components::stat_card::StatCard;
use crate::state::list_view::{Filterable, ListView};
#[cfg(feature = "hydrate")]
use crate::state::notify::{self, NoticeState};
use crate::util::format::format_date_br;

impl Filterable for Company {
    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(contact) = &self.contact_person {
            fields.push(contact);
        }
        if let Some(email) = &self.email {
            fields.push(email);
        }
        fields
    }
}

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let listing = RwSignal::new(ListView::<Company>::new());

    #[cfg(feature = "hydrate")]
    {
        let notices = expect_context::<RwSignal<NoticeState>>();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_companies().await {
                Ok(rows) => listing.update(|l| l.finish_load(rows)),
                Err(err) => {
                    log::warn!("companies load failed: {err}");
                    listing.update(|l| l.fail_load());
                    notify::push_transient(
                        notices,
                        "Erro ao carregar empresas",
                        "Não foi possível carregar a lista de empresas.",
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
                        <p>"Carregando empresas..."</p>
                    </div>
                }
            }
        >
            <div class="page">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">"Empresas Terceirizadas"</h1>
                        <p class="page__subtitle">
                            "Gerenciar empresas prestadoras de serviços de manutenção"
                        </p>
                    </div>
                    <div class="page__actions">
                        <button class="btn">"Filtros"</button>
                        <button class="btn btn--primary">"Nova Empresa"</button>
                    </div>
                </header>

                <div class="page__toolbar">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Buscar por nome, contato ou email..."
                        prop:value=move || listing.get().term
                        on:input=move |ev| {
                            listing.update(|l| l.set_term(event_target_value(&ev)));
                        }
                    />
                    {move || {
                        view! {
                            <StatCard
                                value=listing.get().items.len().to_string()
                                label="Total de Empresas"
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
                            .map(|company| view! { <CompanyCard company=company/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || !listing.get().is_loading() && listing.get().filtered().is_empty()>
                    {move || {
                        let detail = if listing.get().term.is_empty() {
                            "Nenhuma empresa cadastrada no sistema."
                        } else {
                            "Tente ajustar os termos de busca ou limpar os filtros."
                        };
                        view! {
                            <EmptyState glyph="👥" title="Nenhuma empresa encontrada" detail=detail/>
                        }
                    }}
                </Show>
            </div>
        </Show>
    }
}

/// A single company card.
#[component]
fn CompanyCard(company: Company) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{company.name.clone()}</h3>
            </div>

            <div class="card__body">
                {company
                    .contact_person
                    .clone()
                    .map(|contact| {
                        view! {
                            <p class="card__line">
                                <span class="card__line-glyph" aria-hidden="true">"👤"</span>
                                {contact}
                            </p>
                        }
                    })}
                {company
                    .email
                    .clone()
                    .map(|email| {
                        view! {
                            <p class="card__line">
                                <span class="card__line-glyph" aria-hidden="true">"✉"</span>
                                {email}
                            </p>
                        }
                    })}
                {company
                    .phone
                    .clone()
                    .map(|phone| {
                        view! {
                            <p class="card__line">
                                <span class="card__line-glyph" aria-hidden="true">"☎"</span>
                                {phone}
                            </p>
                        }
                    })}
                <p class="card__line card__line--muted">
                    {format!("Cadastrada em {}", format_date_br(&company.created_at))}
                </p>
            </div>

            <div class="card__actions">
                <button class="btn">"Ver Detalhes"</button>
                <button class="btn btn--primary">"Editar"</button>
            </div>
        </div>
    }
}
