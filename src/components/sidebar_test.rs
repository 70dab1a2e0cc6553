use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/pets", "/pets"));
    assert!(is_active("/pets/", "/pets"));
}

#[test]
fn nested_route_keeps_parent_active() {
    assert!(is_active("/appointments/book", "/appointments"));
}

#[test]
fn shared_prefix_is_not_a_match() {
    assert!(!is_active("/petsitters", "/pets"));
    assert!(!is_active("/invoices", "/dashboard"));
}

#[test]
fn nav_lists_four_sections_starting_with_home() {
    assert_eq!(NAV_ITEMS.len(), 4);
    assert_eq!(NAV_ITEMS[0].href, "/dashboard");
    assert_eq!(NAV_ITEMS[0].label, "Home");
}
