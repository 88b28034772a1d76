use super::*;

fn request(id: i64, status: MaintenanceStatus) -> MaintenanceRequest {
    MaintenanceRequest {
        id,
        property_id: 1001,
        company_id: None,
        description: "Reparo no telhado".to_owned(),
        status,
        request_date: "2025-03-10".to_owned(),
        completion_date: None,
        cost: None,
        created_at: "2025-03-10T12:00:00Z".to_owned(),
        updated_at: "2025-03-10T12:00:00Z".to_owned(),
        property: None,
        company: None,
    }
}

#[test]
fn solicitado_renders_the_pending_badge() {
    assert_eq!(status_badge_class(MaintenanceStatus::Solicitado), "badge--warning");
    assert_eq!(MaintenanceStatus::Solicitado.label(), "Solicitado");
}

#[test]
fn badge_classes_cover_all_statuses() {
    assert_eq!(status_badge_class(MaintenanceStatus::EmAndamento), "badge--info");
    assert_eq!(status_badge_class(MaintenanceStatus::Concluido), "badge--success");
}

#[test]
fn solicitado_counts_toward_the_pending_tally() {
    let items = vec![
        request(1, MaintenanceStatus::Solicitado),
        request(2, MaintenanceStatus::EmAndamento),
        request(3, MaintenanceStatus::Solicitado),
        request(4, MaintenanceStatus::Concluido),
    ];
    let counts = tally(&items);
    assert_eq!(counts.total, 4);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.completed, 1);
}

#[test]
fn tally_of_empty_collection_is_zeroed() {
    assert_eq!(tally(&[]), StatusTally::default());
}

#[test]
fn failed_load_keeps_empty_snapshot_and_no_records_state() {
    let mut listing = ListView::<MaintenanceRequest>::new();
    listing.fail_load();
    assert!(listing.items.is_empty());
    assert!(listing.settled_empty());
}
