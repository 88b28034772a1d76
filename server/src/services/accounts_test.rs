use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_lowercases_and_trims() {
    assert_eq!(normalize_email("  Ana@PRF.gov.BR "), Some("ana@prf.gov.br".to_owned()));
}

#[test]
fn normalize_rejects_missing_at() {
    assert_eq!(normalize_email("ana.prf.gov.br"), None);
}

#[test]
fn normalize_rejects_empty_halves() {
    assert_eq!(normalize_email("@prf.gov.br"), None);
    assert_eq!(normalize_email("ana@"), None);
    assert_eq!(normalize_email(""), None);
}

#[test]
fn normalize_rejects_double_at() {
    assert_eq!(normalize_email("ana@prf@gov.br"), None);
}

// =============================================================================
// password hashing
// =============================================================================

#[test]
fn hash_then_verify_round_trips() {
    let stored = hash_password("segredo123");
    assert!(verify_password("segredo123", &stored));
}

#[test]
fn wrong_password_fails_verification() {
    let stored = hash_password("segredo123");
    assert!(!verify_password("segredo124", &stored));
}

#[test]
fn hashes_are_salted_per_account() {
    assert_ne!(hash_password("mesma senha"), hash_password("mesma senha"));
}

#[test]
fn stored_hash_has_salt_and_digest_halves() {
    let stored = hash_password("x");
    let (salt, digest) = stored.split_once('$').expect("salt$digest form");
    assert_eq!(salt.len(), 32);
    assert_eq!(digest.len(), 64);
}

#[test]
fn malformed_stored_hash_never_verifies() {
    assert!(!verify_password("x", "no-dollar-sign"));
    assert!(!verify_password("x", ""));
}
