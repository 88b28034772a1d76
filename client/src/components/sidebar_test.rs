use super::*;

#[test]
fn dashboard_matches_only_exact_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/properties"));
}

#[test]
fn section_entries_match_their_sub_paths() {
    assert!(is_active("/properties", "/properties"));
    assert!(is_active("/maintenance", "/maintenance"));
    assert!(!is_active("/companies", "/properties"));
}

#[test]
fn nav_items_cover_the_route_surface() {
    let hrefs = NAV_ITEMS.iter().map(|(_, href, _)| *href).collect::<Vec<_>>();
    assert_eq!(hrefs, vec!["/", "/properties", "/maintenance", "/companies"]);
}
