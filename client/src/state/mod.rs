//! Client view-model state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the session, `notify` the transient notice queue, and
//! `list_view` the reusable collection-snapshot-plus-filter state every list
//! page instantiates. All three are plain data inside `RwSignal`s: state
//! changes replace the snapshot and subscribed views redraw.

pub mod auth;
pub mod list_view;
pub mod notify;
