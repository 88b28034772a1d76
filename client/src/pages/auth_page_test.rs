use super::*;

#[test]
fn role_options_use_the_sign_up_vocabulary() {
    let values = ROLE_OPTIONS.iter().map(|r| r.as_str()).collect::<Vec<_>>();
    assert_eq!(values, vec!["admin", "gestor_prf", "servidor_prf", "empresa"]);
}

#[test]
fn signup_requires_a_username() {
    let err = validate_signup("   ", "admin").unwrap_err();
    assert_eq!(err, "Informe um nome de usuário.");
}

#[test]
fn signup_requires_a_role_selection() {
    let err = validate_signup("ana", "").unwrap_err();
    assert_eq!(err, "Selecione o tipo de usuário.");
}

#[test]
fn signup_rejects_stored_role_values_on_the_form() {
    // The form speaks the sign-up vocabulary; stored labels are not options.
    assert!(validate_signup("ana", "admin_prf").is_err());
}

#[test]
fn valid_signup_fields_pass() {
    assert_eq!(validate_signup("ana", "empresa").unwrap(), SignupRole::Empresa);
}
