//! Shared domain records for the building-maintenance dashboard.
//!
//! This crate owns the entity representation used by both `server` and
//! `client`. Rows mirror the relational schema; enumerations carry the same
//! wire values as the Postgres enum types so serde round-trips stay lossless
//! on both sides of the HTTP boundary.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Error returned when a stored enum value does not match any known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    /// Enum family the value was parsed against (e.g. `"property_situation"`).
    pub kind: &'static str,
    /// The offending raw value.
    pub value: String,
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Building category of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Police post along a highway stretch.
    PostoPolicial,
    /// Administrative unit (regional office, superintendence).
    UnidadeAdministrativa,
    /// Anything else (warehouses, annexes, leased floors).
    Outros,
}

impl PropertyKind {
    /// Wire/database value, identical to the Postgres enum label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostoPolicial => "posto_policial",
            Self::UnidadeAdministrativa => "unidade_administrativa",
            Self::Outros => "outros",
        }
    }

    /// Parse a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `value` is not a known kind.
    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value {
            "posto_policial" => Ok(Self::PostoPolicial),
            "unidade_administrativa" => Ok(Self::UnidadeAdministrativa),
            "outros" => Ok(Self::Outros),
            other => Err(UnknownVariant { kind: "property_kind", value: other.to_owned() }),
        }
    }

    /// Portuguese display label used on cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PostoPolicial => "Posto Policial",
            Self::UnidadeAdministrativa => "Unidade Administrativa",
            Self::Outros => "Outros",
        }
    }
}

/// Occupancy situation of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertySituation {
    /// In active use.
    Ativo,
    /// Deactivated.
    Inativo,
    /// Under renovation.
    EmReforma,
}

impl PropertySituation {
    /// Wire/database value, identical to the Postgres enum label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ativo => "ativo",
            Self::Inativo => "inativo",
            Self::EmReforma => "em_reforma",
        }
    }

    /// Parse a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `value` is not a known situation.
    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value {
            "ativo" => Ok(Self::Ativo),
            "inativo" => Ok(Self::Inativo),
            "em_reforma" => Ok(Self::EmReforma),
            other => Err(UnknownVariant { kind: "property_situation", value: other.to_owned() }),
        }
    }

    /// Portuguese display label used on badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ativo => "Em Uso",
            Self::Inativo => "Desativado",
            Self::EmReforma => "Em Reforma",
        }
    }
}

/// Conservation grade assigned during facility inspections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conservation {
    Otimo,
    Bom,
    Regular,
    Ruim,
    Critico,
}

impl Conservation {
    /// Wire/database value, identical to the Postgres enum label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Otimo => "otimo",
            Self::Bom => "bom",
            Self::Regular => "regular",
            Self::Ruim => "ruim",
            Self::Critico => "critico",
        }
    }

    /// Parse a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `value` is not a known grade.
    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value {
            "otimo" => Ok(Self::Otimo),
            "bom" => Ok(Self::Bom),
            "regular" => Ok(Self::Regular),
            "ruim" => Ok(Self::Ruim),
            "critico" => Ok(Self::Critico),
            other => Err(UnknownVariant { kind: "conservation", value: other.to_owned() }),
        }
    }

    /// Portuguese display label used on badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Otimo => "Ótimo",
            Self::Bom => "Bom",
            Self::Regular => "Regular",
            Self::Ruim => "Ruim",
            Self::Critico => "Crítico",
        }
    }
}

/// Workflow position of a maintenance request.
///
/// Transitions are informally `solicitado → em_andamento → concluido`, but
/// nothing enforces the order; this is a display state, not a guarded state
/// machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// Requested, waiting for assignment.
    Solicitado,
    /// A company is working on it.
    EmAndamento,
    /// Work finished.
    Concluido,
}

impl MaintenanceStatus {
    /// Wire/database value, identical to the Postgres enum label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solicitado => "solicitado",
            Self::EmAndamento => "em_andamento",
            Self::Concluido => "concluido",
        }
    }

    /// Parse a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `value` is not a known status.
    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value {
            "solicitado" => Ok(Self::Solicitado),
            "em_andamento" => Ok(Self::EmAndamento),
            "concluido" => Ok(Self::Concluido),
            other => Err(UnknownVariant { kind: "maintenance_status", value: other.to_owned() }),
        }
    }

    /// Portuguese display label used on badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Solicitado => "Solicitado",
            Self::EmAndamento => "Em Andamento",
            Self::Concluido => "Concluído",
        }
    }
}

/// Stored account role, identical to the `user_role_enum` Postgres type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    AdminPrf,
    UserPrf,
    CompanyAdmin,
    CompanyUser,
}

impl UserRole {
    /// Wire/database value, identical to the Postgres enum label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdminPrf => "admin_prf",
            Self::UserPrf => "user_prf",
            Self::CompanyAdmin => "company_admin",
            Self::CompanyUser => "company_user",
        }
    }

    /// Parse a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `value` is not a known role.
    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value {
            "admin_prf" => Ok(Self::AdminPrf),
            "user_prf" => Ok(Self::UserPrf),
            "company_admin" => Ok(Self::CompanyAdmin),
            "company_user" => Ok(Self::CompanyUser),
            other => Err(UnknownVariant { kind: "user_role", value: other.to_owned() }),
        }
    }

    /// Portuguese display label for the top-bar user menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AdminPrf => "Administrador PRF",
            Self::UserPrf => "Servidor PRF",
            Self::CompanyAdmin => "Empresa (gestão)",
            Self::CompanyUser => "Empresa (execução)",
        }
    }
}

/// Role option offered on the sign-up form.
///
/// This set deliberately does NOT match [`UserRole`]: the sign-up form
/// speaks a four-option vocabulary while accounts store a different
/// four-value one. The two stay distinct types, with exactly one explicit
/// mapping at the sign-up boundary ([`SignupRole::stored_role`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupRole {
    /// "Administrador".
    Admin,
    /// "Gestor PRF".
    GestorPrf,
    /// "Servidor PRF".
    ServidorPrf,
    /// "Empresa Terceirizada".
    Empresa,
}

impl SignupRole {
    /// Wire value submitted by the sign-up form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::GestorPrf => "gestor_prf",
            Self::ServidorPrf => "servidor_prf",
            Self::Empresa => "empresa",
        }
    }

    /// Parse a form value.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownVariant`] when `value` is not a known option.
    pub fn parse(value: &str) -> Result<Self, UnknownVariant> {
        match value {
            "admin" => Ok(Self::Admin),
            "gestor_prf" => Ok(Self::GestorPrf),
            "servidor_prf" => Ok(Self::ServidorPrf),
            "empresa" => Ok(Self::Empresa),
            other => Err(UnknownVariant { kind: "signup_role", value: other.to_owned() }),
        }
    }

    /// Portuguese display label for the sign-up role select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::GestorPrf => "Gestor PRF",
            Self::ServidorPrf => "Servidor PRF",
            Self::Empresa => "Empresa Terceirizada",
        }
    }

    /// The stored role an account created through this option receives.
    ///
    /// `admin` and `gestor_prf` both land on `admin_prf`; company sign-ups
    /// land on `company_admin` (the first account for a company administers
    /// it). The collapse is intentional and documented rather than silent.
    #[must_use]
    pub fn stored_role(self) -> UserRole {
        match self {
            Self::Admin | Self::GestorPrf => UserRole::AdminPrf,
            Self::ServidorPrf => UserRole::UserPrf,
            Self::Empresa => UserRole::CompanyAdmin,
        }
    }
}

// =============================================================================
// ENTITY ROWS
// =============================================================================

/// A managed building, keyed by its CAIP inventory number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// CAIP inventory identifier (primary key).
    pub id_caip: i64,
    /// Managing regional unit, e.g. `"SPRF-GO"`.
    pub unidade_gestora: String,
    /// Display name, e.g. `"UOP 01 - BR-060"`.
    pub nome_unidade: String,
    /// Street address.
    pub endereco: String,
    /// Building category.
    pub tipo_imovel: PropertyKind,
    /// Occupancy situation.
    pub situacao: PropertySituation,
    /// Conservation grade from the latest inspection, if any.
    pub estado_conservacao: Option<Conservation>,
    /// Built area in square meters.
    pub area_construida_m2: Option<f64>,
    /// Lot area in square meters.
    pub area_terreno_m2: Option<f64>,
    /// Vehicle-retention yard area in square meters.
    pub area_patio_retencao_m2: Option<f64>,
    /// Covered lane area in square meters.
    pub area_cobertura_pista_m2: Option<f64>,
    /// Covered inspection area in square meters.
    pub area_cobertura_fiscalizacao_m2: Option<f64>,
    /// Geographic coordinates as free text (`"lat,lon"`).
    pub coordenadas: Option<String>,
    /// Estimated useful life in years.
    pub vida_util_estimada: Option<i32>,
    /// Row creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last mutation timestamp (RFC 3339).
    pub updated_at: String,
}

/// Property fields embedded into a maintenance request for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub nome_unidade: String,
    pub unidade_gestora: String,
}

/// Company fields embedded into a maintenance request for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub name: String,
}

/// A tracked work order against a property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    /// Sequential identifier.
    pub id: i64,
    /// Property the work targets (must exist).
    pub property_id: i64,
    /// Company performing the work, once assigned.
    pub company_id: Option<i64>,
    /// What needs doing.
    pub description: String,
    /// Workflow position.
    pub status: MaintenanceStatus,
    /// Date the request was opened (ISO `YYYY-MM-DD`).
    pub request_date: String,
    /// Date the work finished, when concluded (ISO `YYYY-MM-DD`).
    pub completion_date: Option<String>,
    /// Final or estimated cost in BRL.
    pub cost: Option<f64>,
    /// Row creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last mutation timestamp (RFC 3339).
    pub updated_at: String,
    /// Embedded property summary; present only when the caller asked for
    /// relation embedding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertySummary>,
    /// Embedded company summary; present only when the caller asked for
    /// relation embedding and a company is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanySummary>,
}

/// An outsourced maintenance service provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Sequential identifier.
    pub id: i64,
    /// Legal or trade name.
    pub name: String,
    /// Contact person, if registered.
    pub contact_person: Option<String>,
    /// Contact email, if registered.
    pub email: Option<String>,
    /// Contact phone, if registered.
    pub phone: Option<String>,
    /// Row creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last mutation timestamp (RFC 3339).
    pub updated_at: String,
}

/// The authenticated account as returned by `/api/auth/me`.
///
/// The credential hash never leaves the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display username.
    pub username: String,
    /// Stored role.
    pub role: UserRole,
}

/// Aggregate counters shown on the dashboard landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total registered properties.
    pub properties: i64,
    /// Total maintenance requests, any status.
    pub maintenance_requests: i64,
    /// Total registered companies.
    pub companies: i64,
    /// Requests still in `solicitado`.
    pub pending_requests: i64,
}
