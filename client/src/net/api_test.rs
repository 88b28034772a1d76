use super::*;

#[test]
fn maintenance_endpoint_requests_relation_embedding() {
    assert_eq!(MAINTENANCE_ENDPOINT, "/api/maintenance?embed=relations");
}

#[test]
fn list_failed_message_names_collection_and_status() {
    assert_eq!(list_failed_message("imóveis", 500), "imóveis request failed: 500");
}

#[test]
fn sign_in_unauthorized_gets_credential_message() {
    assert_eq!(sign_in_failed_message(401), "Email ou senha inválidos.");
}

#[test]
fn sign_in_other_statuses_get_generic_message() {
    assert_eq!(sign_in_failed_message(500), "Falha ao entrar (500).");
}

#[test]
fn sign_up_conflict_reports_existing_account() {
    assert_eq!(sign_up_failed_message(409), "Já existe uma conta com este email.");
}

#[test]
fn sign_up_bad_request_reports_invalid_form() {
    assert_eq!(sign_up_failed_message(400), "Dados de cadastro inválidos.");
}

#[test]
fn sign_up_other_statuses_get_generic_message() {
    assert_eq!(sign_up_failed_message(503), "Falha ao criar conta (503).");
}
