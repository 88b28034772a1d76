use super::*;

#[test]
fn initial_is_first_email_letter_uppercased() {
    assert_eq!(user_initial("fiscal@prf.gov.br"), "F");
    assert_eq!(user_initial("ana@example.com"), "A");
}

#[test]
fn empty_email_falls_back_to_placeholder() {
    assert_eq!(user_initial(""), "U");
}
