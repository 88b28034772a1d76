//! Floating stack of transient notices.
//!
//! Rendered once by the shell; pages push into the shared queue through
//! `state::notify::push_transient` and never render notices themselves.

use leptos::prelude::*;

use crate::state::notify::NoticeState;

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices" role="status">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class="notice notice--destructive" on:click=move |_| {
                                notices.update(|state| state.dismiss(id));
                            }>
                                <strong class="notice__title">{notice.title}</strong>
                                <span class="notice__detail">{notice.detail}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
