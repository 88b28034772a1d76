//! Dashboard aggregate routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use records::DashboardStats;
use sqlx::Row;

use super::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/dashboard/stats` — entity counts plus the pending-request tally.
pub async fn stats(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<DashboardStats>, StatusCode> {
    let row = sqlx::query(
        r"SELECT
              (SELECT COUNT(*) FROM properties)                                        AS properties,
              (SELECT COUNT(*) FROM maintenance_requests)                              AS maintenance_requests,
              (SELECT COUNT(*) FROM companies)                                         AS companies,
              (SELECT COUNT(*) FROM maintenance_requests WHERE status = 'solicitado')  AS pending_requests",
    )
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "dashboard stats query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(DashboardStats {
        properties: row.get("properties"),
        maintenance_requests: row.get("maintenance_requests"),
        companies: row.get("companies"),
        pending_requests: row.get("pending_requests"),
    }))
}
