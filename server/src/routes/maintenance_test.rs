use super::*;

#[test]
fn embed_absent_means_no_relations() {
    assert!(!embed_requested(None));
}

#[test]
fn embed_relations_is_recognized() {
    assert!(embed_requested(Some("relations")));
}

#[test]
fn embed_accepts_comma_separated_lists() {
    assert!(embed_requested(Some("foo,relations")));
    assert!(embed_requested(Some(" relations , bar ")));
}

#[test]
fn unrelated_embed_values_are_ignored() {
    assert!(!embed_requested(Some("foo,bar")));
    assert!(!embed_requested(Some("")));
}
