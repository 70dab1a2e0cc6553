use super::*;
use crate::net::types::AppointmentStatus;

fn appointment(id: i64, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        pet_id: 1,
        vet_name: "Dr. Lee".to_owned(),
        datetime: "2026-03-05T14:30:00".to_owned(),
        status,
        services: Vec::new(),
    }
}

fn sample() -> Vec<Appointment> {
    vec![
        appointment(1, AppointmentStatus::Scheduled),
        appointment(2, AppointmentStatus::Done),
        appointment(3, AppointmentStatus::Scheduled),
    ]
}

// =============================================================
// Filters
// =============================================================

#[test]
fn filter_counts_per_tab() {
    let list = sample();
    assert_eq!(AppointmentFilter::All.count(&list), 3);
    assert_eq!(AppointmentFilter::Scheduled.count(&list), 2);
    assert_eq!(AppointmentFilter::Done.count(&list), 1);
}

#[test]
fn filter_apply_keeps_order() {
    let scheduled = AppointmentFilter::Scheduled.apply(&sample());
    assert_eq!(scheduled.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn empty_copy_offers_booking_only_for_all() {
    assert_eq!(AppointmentFilter::All.empty_copy().0, "No Appointments");
    assert_eq!(AppointmentFilter::Done.empty_copy().0, "No done appointments");
    assert_eq!(AppointmentFilter::Scheduled.empty_copy().1, "No appointments in this category");
}

// =============================================================
// Card text
// =============================================================

#[test]
fn status_label_and_badge_follow_status() {
    let scheduled = appointment(1, AppointmentStatus::Scheduled);
    let done = appointment(2, AppointmentStatus::Done);
    assert_eq!(status_label(&scheduled), "SCHEDULED");
    assert_eq!(status_label(&done), "✓ DONE");
    assert_eq!(status_badge(&scheduled), BadgeVariant::Scheduled);
    assert_eq!(status_badge(&done), BadgeVariant::Done);
}

#[test]
fn services_label_joins_names_or_says_tbd() {
    assert_eq!(services_label(&[]), "Services TBD");
    let services = vec![
        Service { id: 1, name: "Checkup".to_owned(), price: 45.0 },
        Service { id: 2, name: "Vaccine".to_owned(), price: 30.0 },
    ];
    assert_eq!(services_label(&services), "Checkup, Vaccine");
}

// =============================================================
// Local mutations
// =============================================================

#[test]
fn mark_done_replaces_item_in_place() {
    let mut list = sample();
    assert!(replace_appointment(&mut list, appointment(1, AppointmentStatus::Done)));
    assert_eq!(status_label(&list[0]), "✓ DONE");
    assert_eq!(list.len(), 3);
}

#[test]
fn replace_unknown_id_is_a_no_op() {
    let mut list = sample();
    assert!(!replace_appointment(&mut list, appointment(9, AppointmentStatus::Done)));
    assert_eq!(list, sample());
}

#[test]
fn cancel_removes_locally() {
    let mut list = sample();
    assert!(remove_appointment(&mut list, 2));
    assert_eq!(list.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(!remove_appointment(&mut list, 2));
}
