//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade into the notice-and-continue flow without crashing hydration.
//! Requests are fire-and-forget from the page's perspective: no retry, no
//! timeout, no cancellation once issued.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{Company, DashboardStats, MaintenanceRequest, Property, SessionUser};

#[cfg(any(test, feature = "hydrate"))]
const MAINTENANCE_ENDPOINT: &str = "/api/maintenance?embed=relations";

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(collection: &str, status: u16) -> String {
    format!("{collection} request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    if status == 401 {
        "Email ou senha inválidos.".to_owned()
    } else {
        format!("Falha ao entrar ({status}).")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    match status {
        409 => "Já existe uma conta com este email.".to_owned(),
        400 => "Dados de cadastro inválidos.".to_owned(),
        _ => format!("Falha ao criar conta ({status})."),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the credentials
/// are rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signin")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`. The server signs the new
/// account in immediately.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the form data is
/// rejected.
pub async fn sign_up(email: &str, password: &str, username: &str, role: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "username": username,
            "role": role,
        });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_up_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, username, role);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch all properties ordered by unit name.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_properties() -> Result<Vec<Property>, String> {
    fetch_list("imóveis", "/api/properties").await
}

/// Fetch all maintenance requests, newest first, with the property and
/// company summaries embedded for display.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_maintenance_requests() -> Result<Vec<MaintenanceRequest>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list("manutenções", MAINTENANCE_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fetch_list("manutenções", "").await
    }
}

/// Fetch all companies ordered by name.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    fetch_list("empresas", "/api/companies").await
}

/// Fetch the dashboard aggregate counters.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/dashboard/stats")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message("stats", resp.status()));
        }
        resp.json::<DashboardStats>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(collection: &str, url: &str) -> Result<Vec<T>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(list_failed_message(collection, resp.status()));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

#[cfg(not(feature = "hydrate"))]
async fn fetch_list<T>(collection: &str, url: &str) -> Result<Vec<T>, String> {
    let _ = (collection, url);
    Err("not available on server".to_owned())
}
