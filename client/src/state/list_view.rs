//! Collection snapshot with a live substring filter.
//!
//! DESIGN
//! ======
//! Every list page follows the same shape: fetch the full collection once on
//! mount, hold it in memory, and derive a filtered view from a search term.
//! `ListView` centralizes that shape. The derived view is recomputed
//! synchronously from the latest `(items, term)` pair, so a renderer can
//! never observe a stale snapshot paired with a fresh term.
//!
//! A failed fetch keeps the previous snapshot (empty, if none existed) and
//! moves to `Failed`; the page keeps rendering whatever it has and reports
//! the failure once through the notice queue. No retry, no polling.

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;

/// Rows that expose the fixed set of fields the substring filter runs
/// against.
pub trait Filterable {
    /// The per-entity fields tested by [`ListView::filtered`].
    fn haystacks(&self) -> Vec<&str>;
}

/// Where the one-shot collection fetch currently stands.
///
/// `Failed` is distinct from `Loaded` so an empty-after-error view renders
/// the "no records" state rather than pretending the load succeeded, and
/// distinct from `Loading` so the spinner never shows stale emptiness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch in flight; the page shows its loading placeholder.
    #[default]
    Loading,
    /// Snapshot replaced by a successful fetch.
    Loaded,
    /// Fetch failed; previous snapshot left in place.
    Failed,
}

/// In-memory collection snapshot plus the live search term.
#[derive(Clone, Debug, Default)]
pub struct ListView<T> {
    /// Latest snapshot of the backing collection.
    pub items: Vec<T>,
    /// Fetch lifecycle position.
    pub phase: LoadPhase,
    /// Live search term; empty matches everything.
    pub term: String,
}

impl<T> ListView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), phase: LoadPhase::Loading, term: String::new() }
    }

    /// Replace the snapshot with a successful fetch result.
    pub fn finish_load(&mut self, rows: Vec<T>) {
        self.items = rows;
        self.phase = LoadPhase::Loaded;
    }

    /// Record a failed fetch. The previous snapshot stays in place.
    pub fn fail_load(&mut self) {
        self.phase = LoadPhase::Failed;
    }

    /// Update the live search term. No network effect.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// True while the one-shot fetch is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// True once the fetch has settled (either way) with nothing to show.
    /// This is the "no records" UI state, distinct from loading.
    #[must_use]
    pub fn settled_empty(&self) -> bool {
        self.phase != LoadPhase::Loading && self.items.is_empty()
    }
}

impl<T: Filterable + Clone> ListView<T> {
    /// The derived view: rows whose designated fields contain the term.
    ///
    /// Always a subset of `items`; with an empty term it equals `items`.
    #[must_use]
    pub fn filtered(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|row| matches_term(&row.haystacks(), &self.term))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring test over a row's designated fields.
///
/// An empty term matches every row.
#[must_use]
pub fn matches_term(haystacks: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    haystacks.iter().any(|hay| hay.to_lowercase().contains(&needle))
}
