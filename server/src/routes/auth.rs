//! Auth routes — email/password sign-in, sign-up, session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use records::{SessionUser, SignupRole};
use serde::Deserialize;
use time::Duration;

use crate::services::accounts::{self, AccountError};
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message }))
}

#[derive(Deserialize)]
pub struct SigninPayload {
    email: String,
    password: String,
}

/// `POST /api/auth/signin` — verify credentials, set cookie, return the user.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<SigninPayload>) -> Response {
    match accounts::sign_in(&state.pool, &payload.email, &payload.password).await {
        Ok(user) => issue_session(&state, jar, user).await,
        Err(AccountError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, error_body("invalid credentials")).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "sign-in failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct SignupPayload {
    email: String,
    password: String,
    username: String,
    role: String,
}

/// `POST /api/auth/signup` — create the account, set cookie, return the user.
///
/// The payload speaks the sign-up role vocabulary; the stored role is decided
/// by the account service.
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(payload): Json<SignupPayload>) -> Response {
    let Ok(role) = SignupRole::parse(&payload.role) else {
        return (StatusCode::BAD_REQUEST, error_body("unknown role")).into_response();
    };
    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return (StatusCode::BAD_REQUEST, error_body("missing username or password")).into_response();
    }

    match accounts::sign_up(&state.pool, &payload.email, &payload.password, username, role).await {
        Ok(user) => issue_session(&state, jar, user).await,
        Err(AccountError::EmailTaken) => (StatusCode::CONFLICT, error_body("email already registered")).into_response(),
        Err(AccountError::InvalidEmail) => (StatusCode::BAD_REQUEST, error_body("invalid email")).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "sign-up failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn issue_session(state: &AppState, jar: CookieJar, user: SessionUser) -> Response {
    match session::create_session(&state.pool, user.id).await {
        Ok(token) => {
            let jar = jar.add(session_cookie(token, cookie_secure()));
            (jar, Json(user)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let jar = CookieJar::new().add(clear_session_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
