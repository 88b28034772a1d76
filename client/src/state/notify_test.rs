use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.push("Erro", "detalhe");
    let second = state.push("Erro", "detalhe");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticeState::default();
    let first = state.push("Erro ao carregar imóveis", "a");
    let second = state.push("Erro ao carregar empresas", "b");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = NoticeState::default();
    state.push("Erro", "x");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn duplicate_text_notices_keep_distinct_ids() {
    let mut state = NoticeState::default();
    let first = state.push("Erro", "mesmo texto");
    let second = state.push("Erro", "mesmo texto");
    state.dismiss(second);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, first);
}
