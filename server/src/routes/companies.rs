//! Company collection routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use records::Company;
use sqlx::Row;

use super::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/companies` — the full collection, ordered by name.
pub async fn list_companies(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Company>>, StatusCode> {
    let rows = sqlx::query(
        r#"SELECT id, name, contact_person, email, phone,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
           FROM companies
           ORDER BY name"#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "companies query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let companies = rows
        .iter()
        .map(|row| Company {
            id: row.get("id"),
            name: row.get("name"),
            contact_person: row.get("contact_person"),
            email: row.get("email"),
            phone: row.get("phone"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
        .collect();

    Ok(Json(companies))
}
