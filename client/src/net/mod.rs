//! Networking layer: REST calls against the server's JSON API.

pub mod api;
