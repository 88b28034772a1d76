use super::*;

#[test]
fn maintenance_status_wire_values_round_trip() {
    for status in [MaintenanceStatus::Solicitado, MaintenanceStatus::EmAndamento, MaintenanceStatus::Concluido] {
        assert_eq!(MaintenanceStatus::parse(status.as_str()).unwrap(), status);
    }
}

#[test]
fn maintenance_status_serde_matches_db_labels() {
    let json = serde_json::to_string(&MaintenanceStatus::EmAndamento).unwrap();
    assert_eq!(json, "\"em_andamento\"");
    let back: MaintenanceStatus = serde_json::from_str("\"solicitado\"").unwrap();
    assert_eq!(back, MaintenanceStatus::Solicitado);
}

#[test]
fn maintenance_status_labels() {
    assert_eq!(MaintenanceStatus::Solicitado.label(), "Solicitado");
    assert_eq!(MaintenanceStatus::EmAndamento.label(), "Em Andamento");
    assert_eq!(MaintenanceStatus::Concluido.label(), "Concluído");
}

#[test]
fn property_situation_round_trip_and_labels() {
    for situation in [PropertySituation::Ativo, PropertySituation::Inativo, PropertySituation::EmReforma] {
        assert_eq!(PropertySituation::parse(situation.as_str()).unwrap(), situation);
    }
    assert_eq!(PropertySituation::Ativo.label(), "Em Uso");
    assert_eq!(PropertySituation::EmReforma.label(), "Em Reforma");
}

#[test]
fn conservation_parse_rejects_unknown() {
    let err = Conservation::parse("pessimo").unwrap_err();
    assert_eq!(err.kind, "conservation");
    assert_eq!(err.value, "pessimo");
}

#[test]
fn property_kind_serde_uses_snake_case() {
    let json = serde_json::to_string(&PropertyKind::UnidadeAdministrativa).unwrap();
    assert_eq!(json, "\"unidade_administrativa\"");
}

#[test]
fn user_role_round_trip() {
    for role in [UserRole::AdminPrf, UserRole::UserPrf, UserRole::CompanyAdmin, UserRole::CompanyUser] {
        assert_eq!(UserRole::parse(role.as_str()).unwrap(), role);
    }
}

// The sign-up vocabulary and the stored vocabulary genuinely disagree; the
// mapping below is the documented resolution, not a unification.
#[test]
fn signup_role_maps_onto_stored_role() {
    assert_eq!(SignupRole::Admin.stored_role(), UserRole::AdminPrf);
    assert_eq!(SignupRole::GestorPrf.stored_role(), UserRole::AdminPrf);
    assert_eq!(SignupRole::ServidorPrf.stored_role(), UserRole::UserPrf);
    assert_eq!(SignupRole::Empresa.stored_role(), UserRole::CompanyAdmin);
}

#[test]
fn signup_role_wire_values_differ_from_stored() {
    assert_eq!(SignupRole::GestorPrf.as_str(), "gestor_prf");
    assert!(UserRole::parse("gestor_prf").is_err());
    assert!(SignupRole::parse("admin_prf").is_err());
}

#[test]
fn maintenance_request_deserializes_without_embeds() {
    let json = r#"{
        "id": 7,
        "property_id": 1001,
        "company_id": null,
        "description": "Troca de telhado",
        "status": "solicitado",
        "request_date": "2025-03-10",
        "completion_date": null,
        "cost": null,
        "created_at": "2025-03-10T12:00:00Z",
        "updated_at": "2025-03-10T12:00:00Z"
    }"#;
    let request: MaintenanceRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.id, 7);
    assert_eq!(request.status, MaintenanceStatus::Solicitado);
    assert!(request.property.is_none());
    assert!(request.company.is_none());
}

#[test]
fn maintenance_request_skips_absent_embeds_on_serialize() {
    let request = MaintenanceRequest {
        id: 1,
        property_id: 1001,
        company_id: Some(3),
        description: "Pintura externa".to_owned(),
        status: MaintenanceStatus::Concluido,
        request_date: "2025-01-05".to_owned(),
        completion_date: Some("2025-02-01".to_owned()),
        cost: Some(15_000.0),
        created_at: "2025-01-05T08:00:00Z".to_owned(),
        updated_at: "2025-02-01T17:30:00Z".to_owned(),
        property: None,
        company: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("property").is_none());
    assert!(value.get("company").is_none());
}

#[test]
fn session_user_serde_round_trip() {
    let user = SessionUser {
        id: 42,
        email: "fiscal@prf.gov.br".to_owned(),
        username: "fiscal".to_owned(),
        role: UserRole::UserPrf,
    };
    let json = serde_json::to_string(&user).unwrap();
    let back: SessionUser = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn dashboard_stats_default_is_zeroed() {
    let stats = DashboardStats::default();
    assert_eq!(stats.properties, 0);
    assert_eq!(stats.pending_requests, 0);
}
