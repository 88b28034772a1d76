use super::*;

fn company(name: &str, contact: Option<&str>, email: Option<&str>) -> Company {
    Company {
        id: 1,
        name: name.to_owned(),
        contact_person: contact.map(str::to_owned),
        email: email.map(str::to_owned),
        phone: None,
        created_at: "2024-11-02T09:00:00Z".to_owned(),
        updated_at: "2024-11-02T09:00:00Z".to_owned(),
    }
}

#[test]
fn filter_runs_over_name_contact_and_email() {
    let row = company("Alfa Engenharia", Some("Marcos"), Some("contato@alfa.com"));
    assert_eq!(row.haystacks(), vec!["Alfa Engenharia", "Marcos", "contato@alfa.com"]);
}

#[test]
fn absent_optional_fields_are_not_searched() {
    let row = company("Beta Obras", None, None);
    assert_eq!(row.haystacks(), vec!["Beta Obras"]);
}

#[test]
fn filter_matches_contact_email() {
    let mut listing = ListView::new();
    listing.finish_load(vec![
        company("Alfa Engenharia", Some("Marcos"), Some("contato@alfa.com")),
        company("Beta Obras", Some("Paula"), Some("obras@beta.com")),
    ]);
    listing.set_term("beta.com");
    let filtered = listing.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Beta Obras");
}

#[test]
fn missing_fields_never_error_just_exclude() {
    let mut listing = ListView::new();
    listing.finish_load(vec![company("Gama Serviços", None, None)]);
    listing.set_term("marcos");
    assert!(listing.filtered().is_empty());
}
