//! Auth page: login / sign-up toggle form.
//!
//! ERROR HANDLING
//! ==============
//! Authentication failures surface inline on the form, not through the
//! notice queue; the page stays usable and keeps the typed email.

#[cfg(test)]
#[path = "auth_page_test.rs"]
mod auth_page_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::SignupRole;

use crate::state::auth::AuthState;

/// Sign-up options in display order.
const ROLE_OPTIONS: [SignupRole; 4] =
    [SignupRole::Admin, SignupRole::GestorPrf, SignupRole::ServidorPrf, SignupRole::Empresa];

/// Validate the sign-up-only fields before submitting.
///
/// # Errors
///
/// Returns the inline message to display when the username is empty or the
/// role select is still on its placeholder.
pub fn validate_signup(username: &str, role: &str) -> Result<SignupRole, String> {
    if username.trim().is_empty() {
        return Err("Informe um nome de usuário.".to_owned());
    }
    SignupRole::parse(role).map_err(|_| "Selecione o tipo de usuário.".to_owned())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let is_login = RwSignal::new(true);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Redirect home once a session is active (covers "already signed in"
    // arrivals and successful submits alike).
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set("Informe email e senha.".to_owned());
            return;
        }

        let signup_fields = if is_login.get() {
            None
        } else {
            match validate_signup(&username.get(), &role.get()) {
                Ok(selected) => Some((username.get().trim().to_owned(), selected)),
                Err(message) => {
                    error.set(message);
                    return;
                }
            }
        };

        busy.set(true);
        error.set(String::new());
        auth.update(AuthState::begin_sign_in);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match &signup_fields {
                None => crate::net::api::sign_in(&email_value, &password_value).await,
                Some((name, selected)) => {
                    crate::net::api::sign_up(&email_value, &password_value, name, selected.as_str()).await
                }
            };
            match outcome {
                Ok(user) => auth.update(|a| a.finish_sign_in(user)),
                Err(message) => {
                    auth.update(AuthState::fail_sign_in);
                    error.set(message);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = signup_fields;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <span class="auth-card__glyph" aria-hidden="true">"🛡"</span>
                <h1 class="auth-card__title">
                    {move || if is_login.get() { "Entrar no Sistema" } else { "Criar Conta" }}
                </h1>
                <p class="auth-card__subtitle">"Sistema de Gestão de Manutenção Predial - PRF"</p>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !is_login.get()>
                        <label class="auth-form__label">
                            "Nome de Usuário"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Seu nome de usuário"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Tipo de Usuário"
                            <select
                                class="auth-form__input"
                                prop:value=move || role.get()
                                on:change=move |ev| role.set(event_target_value(&ev))
                            >
                                <option value="" disabled=true selected=true>
                                    "Selecione o tipo de usuário"
                                </option>
                                {ROLE_OPTIONS
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.as_str()>{option.label()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </Show>

                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Senha"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Sua senha"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Processando..."
                            } else if is_login.get() {
                                "Entrar"
                            } else {
                                "Criar Conta"
                            }
                        }}
                    </button>
                </form>

                <button
                    class="btn auth-card__toggle"
                    type="button"
                    on:click=move |_| {
                        is_login.update(|v| *v = !*v);
                        error.set(String::new());
                    }
                >
                    {move || {
                        if is_login.get() {
                            "Não tem uma conta? Criar conta"
                        } else {
                            "Já tem uma conta? Fazer login"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
