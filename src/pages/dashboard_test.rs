use super::*;

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting("Ada"), "Welcome back, Ada!");
    assert_eq!(greeting(&SessionState::default().display_name().to_owned()), "Welcome back, Guest!");
}

#[test]
fn stat_cards_follow_pets_appointments_invoices_order() {
    let cards = stat_cards(PortfolioStats { pets: 2, appointments: 5, invoices: 1 });
    assert_eq!(cards.map(|(label, _, value)| (label, value)), [("Pets", 2), ("Appointments", 5), ("Invoices", 1)]);
}

#[test]
fn quick_links_point_at_owner_sections() {
    let hrefs: Vec<_> = QUICK_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/pets", "/appointments", "/invoices"]);
}
