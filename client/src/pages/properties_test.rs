use super::*;
use records::PropertyKind;

fn property(name: &str, unit: &str, address: &str, situacao: PropertySituation) -> Property {
    Property {
        id_caip: 1,
        unidade_gestora: unit.to_owned(),
        nome_unidade: name.to_owned(),
        endereco: address.to_owned(),
        tipo_imovel: PropertyKind::PostoPolicial,
        situacao,
        estado_conservacao: None,
        area_construida_m2: None,
        area_terreno_m2: None,
        area_patio_retencao_m2: None,
        area_cobertura_pista_m2: None,
        area_cobertura_fiscalizacao_m2: None,
        coordenadas: None,
        vida_util_estimada: None,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn filter_runs_over_name_unit_and_address() {
    let row = property("UOP 01", "SPRF-GO", "BR-060, km 12", PropertySituation::Ativo);
    assert_eq!(row.haystacks(), vec!["UOP 01", "SPRF-GO", "BR-060, km 12"]);
}

#[test]
fn filter_matches_address_content() {
    let mut listing = ListView::new();
    listing.finish_load(vec![
        property("Posto A", "SPRF-GO", "BR-060, km 12", PropertySituation::Ativo),
        property("Posto B", "SPRF-DF", "BR-040, km 3", PropertySituation::Ativo),
    ]);
    listing.set_term("km 12");
    let filtered = listing.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].nome_unidade, "Posto A");
}

#[test]
fn filter_by_name_is_case_insensitive_and_content_sensitive() {
    let mut listing = ListView::new();
    listing.finish_load(vec![
        property("Posto A", "U", "E", PropertySituation::Ativo),
        property("Posto B", "U", "E", PropertySituation::Ativo),
    ]);
    listing.set_term("b");
    let filtered = listing.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].nome_unidade, "Posto B");
}

#[test]
fn situation_badges_follow_occupancy() {
    assert_eq!(situation_badge_class(PropertySituation::Ativo), "badge--success");
    assert_eq!(situation_badge_class(PropertySituation::Inativo), "badge--danger");
    assert_eq!(situation_badge_class(PropertySituation::EmReforma), "badge--warning");
}

#[test]
fn conservation_badges_group_grades() {
    assert_eq!(conservation_badge_class(Conservation::Otimo), "badge--success");
    assert_eq!(conservation_badge_class(Conservation::Bom), "badge--success");
    assert_eq!(conservation_badge_class(Conservation::Regular), "badge--warning");
    assert_eq!(conservation_badge_class(Conservation::Ruim), "badge--danger");
    assert_eq!(conservation_badge_class(Conservation::Critico), "badge--danger");
}

#[test]
fn in_use_counts_only_active_properties() {
    let items = vec![
        property("A", "U", "E", PropertySituation::Ativo),
        property("B", "U", "E", PropertySituation::EmReforma),
        property("C", "U", "E", PropertySituation::Ativo),
        property("D", "U", "E", PropertySituation::Inativo),
    ];
    assert_eq!(in_use_count(&items), 2);
}
