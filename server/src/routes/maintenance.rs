//! Maintenance-request collection routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list always joins properties and companies server-side; the `embed`
//! query parameter only decides whether the joined summaries are included in
//! the response, mirroring the record-store contract
//! `list(collection, orderBy, embed: relatedCollections)`.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod tests;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{CompanySummary, MaintenanceRequest, MaintenanceStatus, PropertySummary};
use serde::Deserialize;
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    embed: Option<String>,
}

/// Whether the caller asked for the related property/company summaries.
/// Accepts a comma-separated list so `embed=relations,foo` still works.
#[must_use]
pub fn embed_requested(param: Option<&str>) -> bool {
    param.is_some_and(|value| value.split(',').any(|part| part.trim() == "relations"))
}

/// `GET /api/maintenance` — the full collection, newest request first.
pub async fn list_maintenance_requests(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MaintenanceRequest>>, StatusCode> {
    let embed = embed_requested(query.embed.as_deref());

    let rows = sqlx::query(
        r#"SELECT m.id, m.property_id, m.company_id, m.description,
                  m.status::text AS status,
                  to_char(m.request_date, 'YYYY-MM-DD') AS request_date,
                  to_char(m.completion_date, 'YYYY-MM-DD') AS completion_date,
                  m.cost,
                  to_char(m.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  to_char(m.updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at,
                  p.nome_unidade, p.unidade_gestora,
                  c.name AS company_name
           FROM maintenance_requests m
           JOIN properties p ON p.id_caip = m.property_id
           LEFT JOIN companies c ON c.id = m.company_id
           ORDER BY m.request_date DESC, m.id DESC"#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "maintenance query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let requests = rows
        .iter()
        .map(|row| request_from_row(row, embed))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!(error = %e, "maintenance row decode failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(requests))
}

fn request_from_row(row: &PgRow, embed: bool) -> Result<MaintenanceRequest, records::UnknownVariant> {
    let property = embed.then(|| PropertySummary {
        nome_unidade: row.get("nome_unidade"),
        unidade_gestora: row.get("unidade_gestora"),
    });
    let company = if embed {
        row.get::<Option<String>, _>("company_name")
            .map(|name| CompanySummary { name })
    } else {
        None
    };

    Ok(MaintenanceRequest {
        id: row.get("id"),
        property_id: row.get("property_id"),
        company_id: row.get("company_id"),
        description: row.get("description"),
        status: MaintenanceStatus::parse(&row.get::<String, _>("status"))?,
        request_date: row.get("request_date"),
        completion_date: row.get("completion_date"),
        cost: row.get("cost"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        property,
        company,
    })
}
