//! Property collection routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use records::{Conservation, Property, PropertyKind, PropertySituation};
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/properties` — the full collection, ordered by unit name.
pub async fn list_properties(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Property>>, StatusCode> {
    let rows = sqlx::query(
        r#"SELECT id_caip, unidade_gestora, nome_unidade, endereco,
                  tipo_imovel::text AS tipo_imovel,
                  situacao::text AS situacao,
                  estado_conservacao::text AS estado_conservacao,
                  area_construida_m2, area_terreno_m2, area_patio_retencao_m2,
                  area_cobertura_pista_m2, area_cobertura_fiscalizacao_m2,
                  coordenadas, vida_util_estimada,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
           FROM properties
           ORDER BY nome_unidade"#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "properties query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let properties = rows
        .iter()
        .map(property_from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!(error = %e, "properties row decode failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(properties))
}

fn property_from_row(row: &PgRow) -> Result<Property, records::UnknownVariant> {
    let estado_conservacao = row
        .get::<Option<String>, _>("estado_conservacao")
        .map(|v| Conservation::parse(&v))
        .transpose()?;

    Ok(Property {
        id_caip: row.get("id_caip"),
        unidade_gestora: row.get("unidade_gestora"),
        nome_unidade: row.get("nome_unidade"),
        endereco: row.get("endereco"),
        tipo_imovel: PropertyKind::parse(&row.get::<String, _>("tipo_imovel"))?,
        situacao: PropertySituation::parse(&row.get::<String, _>("situacao"))?,
        estado_conservacao,
        area_construida_m2: row.get("area_construida_m2"),
        area_terreno_m2: row.get("area_terreno_m2"),
        area_patio_retencao_m2: row.get("area_patio_retencao_m2"),
        area_cobertura_pista_m2: row.get("area_cobertura_pista_m2"),
        area_cobertura_fiscalizacao_m2: row.get("area_cobertura_fiscalizacao_m2"),
        coordenadas: row.get("coordenadas"),
        vida_util_estimada: row.get("vida_util_estimada"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
