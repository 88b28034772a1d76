//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once through context by `app::App` and read by route guards, the
//! shell, and the auth form. The session is read-only from every page's
//! perspective; only the sign-in/sign-out flows mutate it, through the
//! explicit lifecycle methods below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::SessionUser;

/// Explicit session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session.
    #[default]
    Unauthenticated,
    /// Credentials submitted, response pending.
    Authenticating,
    /// Session active.
    Authenticated,
    /// Logout request in flight.
    SigningOut,
}

/// Session state tracking the current user and the initial probe.
///
/// `loading` covers only the first `/api/auth/me` probe after page load; the
/// shell shows a splash until it settles so protected routes neither flash
/// nor fetch before the session is known.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state: probe in flight, no session known yet.
    #[must_use]
    pub fn probing() -> Self {
        Self { phase: AuthPhase::Unauthenticated, user: None, loading: true }
    }

    /// Settle the initial probe with whatever the server reported.
    pub fn finish_probe(&mut self, user: Option<SessionUser>) {
        self.phase = if user.is_some() { AuthPhase::Authenticated } else { AuthPhase::Unauthenticated };
        self.user = user;
        self.loading = false;
    }

    /// Credentials submitted from the auth form.
    pub fn begin_sign_in(&mut self) {
        self.phase = AuthPhase::Authenticating;
    }

    /// Sign-in (or sign-up) accepted; the session is active.
    pub fn finish_sign_in(&mut self, user: SessionUser) {
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
        self.loading = false;
    }

    /// Sign-in rejected; back to no session.
    pub fn fail_sign_in(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
        self.user = None;
    }

    /// Logout requested.
    pub fn begin_sign_out(&mut self) {
        self.phase = AuthPhase::SigningOut;
    }

    /// Logout settled (server outcome is irrelevant; the cookie is gone).
    pub fn finish_sign_out(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
        self.user = None;
    }

    /// True when a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated && self.user.is_some()
    }
}
