use super::*;
use time::macros::date;

// =============================================================
// Species
// =============================================================

#[test]
fn species_emoji_covers_known_species() {
    assert_eq!(species_emoji("Dog"), "🐕");
    assert_eq!(species_emoji("Cat"), "🐈");
    assert_eq!(species_emoji("Guinea Pig"), "🐹");
}

#[test]
fn unknown_species_gets_paw() {
    assert_eq!(species_emoji("Iguana"), "🐾");
    assert_eq!(species_emoji("Other"), "🐾");
}

#[test]
fn species_options_end_with_other() {
    assert_eq!(SPECIES_OPTIONS.len(), 7);
    assert_eq!(SPECIES_OPTIONS.last(), Some(&"Other"));
}

// =============================================================
// Card details
// =============================================================

#[test]
fn age_label_counts_completed_years() {
    let today = date!(2026 - 03 - 05);
    assert_eq!(age_label(Some("2020-03-05"), today), "6 years");
    assert_eq!(age_label(Some("2020-12-01"), today), "5 years");
    assert_eq!(age_label(None, today), "? years");
}

#[test]
fn book_link_preselects_pet() {
    assert_eq!(book_link(12), "/appointments/book?pet=12");
}

// =============================================================
// Add-pet validation
// =============================================================

#[test]
fn validate_new_pet_requires_all_fields() {
    assert_eq!(validate_new_pet("Rex", "Dog", "", "2020-01-01", "o-1"), Err("Please fill in all fields"));
    assert_eq!(validate_new_pet("Rex", "", "Lab", "2020-01-01", "o-1"), Err("Please fill in all fields"));
}

#[test]
fn validate_new_pet_attaches_owner_id() {
    let pet = validate_new_pet("Rex", "Dog", "Lab", "2020-01-01", "o-1").unwrap();
    assert_eq!(pet.owner_id, "o-1");
    assert_eq!(pet.name, "Rex");
    assert_eq!(pet.dob, "2020-01-01");
}
