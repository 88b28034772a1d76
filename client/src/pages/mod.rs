//! Routed pages, one per entity collection plus auth and the 404 fallback.

pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod maintenance;
pub mod not_found;
pub mod properties;
