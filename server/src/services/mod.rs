//! Service layer: credential handling and session management over the pool.

pub mod accounts;
pub mod session;
