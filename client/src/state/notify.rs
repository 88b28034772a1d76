//! Transient notice queue for fetch-failure reporting.
//!
//! DESIGN
//! ======
//! Failures are notice-and-continue: a failed load pushes exactly one notice
//! and the page keeps rendering its previous (possibly empty) snapshot.
//! Notices carry a monotonically increasing id so dismissal of one never
//! removes a newer one that happens to share the same text.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Seconds a notice stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const NOTICE_TTL_SECS: u64 = 6;

/// A single transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub detail: String,
}

/// Queue of visible notices, newest last.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, title: impl Into<String>, detail: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, title: title.into(), detail: detail.into() });
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }
}

/// Push a notice that dismisses itself after a few seconds.
///
/// On the server the timer is skipped; SSR output never carries notices
/// anyway since they are produced by browser-side fetches.
pub fn push_transient(
    notices: leptos::prelude::RwSignal<NoticeState>,
    title: impl Into<String>,
    detail: impl Into<String>,
) {
    use leptos::prelude::Update;

    let mut id = 0;
    notices.update(|state| id = state.push(title, detail));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(NOTICE_TTL_SECS)).await;
            notices.update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
