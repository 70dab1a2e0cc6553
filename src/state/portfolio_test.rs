use super::*;
use crate::net::types::{AppointmentStatus, Service};

fn pet(id: i64, owner_id: &str, name: &str) -> Pet {
    Pet {
        id,
        owner_id: owner_id.to_owned(),
        name: name.to_owned(),
        species: "Dog".to_owned(),
        breed: None,
        dob: None,
    }
}

fn appointment(id: i64, pet_id: i64) -> Appointment {
    Appointment {
        id,
        pet_id,
        vet_name: "Dr. Lee".to_owned(),
        datetime: "2026-03-05T14:30:00".to_owned(),
        status: AppointmentStatus::Scheduled,
        services: vec![Service { id: 1, name: "Checkup".to_owned(), price: 45.0 }],
    }
}

fn invoice(id: i64, appointment_id: i64) -> Invoice {
    Invoice { id, appointment_id, total: Some(45.0), paid: false, notes: None }
}

// =============================================================
// Ownership chain
// =============================================================

#[test]
fn owner_pets_keeps_only_matching_owner() {
    let pets = vec![pet(1, "a", "Rex"), pet(2, "b", "Tom"), pet(3, "a", "Kiwi")];
    let scoped = owner_pets(pets, "a");
    assert_eq!(scoped.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(scoped.iter().all(|p| p.owner_id == "a"));
}

#[test]
fn owner_pets_compares_ids_as_strings() {
    let pets = vec![pet(1, "42", "Rex"), pet(2, "420", "Tom")];
    assert_eq!(owner_pets(pets, "42").len(), 1);
}

#[test]
fn owner_appointments_follow_pet_set() {
    let pets = vec![pet(1, "a", "Rex")];
    let appts = vec![appointment(10, 1), appointment(11, 2), appointment(12, 1)];
    let scoped = owner_appointments(appts, &pets);
    assert_eq!(scoped.iter().map(|a| a.id).collect::<Vec<_>>(), vec![10, 12]);
}

#[test]
fn owner_invoices_follow_appointment_set() {
    let appts = vec![appointment(10, 1)];
    let invoices = vec![invoice(100, 10), invoice(101, 11)];
    let scoped = owner_invoices(invoices, &appts);
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id, 100);
}

#[test]
fn scope_chains_all_three_filters() {
    let portfolio = OwnerPortfolio::scope(
        "a",
        vec![pet(1, "a", "Rex"), pet(2, "b", "Tom")],
        vec![appointment(10, 1), appointment(11, 2)],
        vec![invoice(100, 10), invoice(101, 11)],
    );
    assert_eq!(portfolio.stats(), PortfolioStats { pets: 1, appointments: 1, invoices: 1 });
    assert!(portfolio.appointment(10).is_some());
    assert!(portfolio.appointment(11).is_none());
}

#[test]
fn scope_for_unknown_owner_is_empty() {
    let portfolio = OwnerPortfolio::scope("zzz", vec![pet(1, "a", "Rex")], vec![appointment(10, 1)], vec![invoice(100, 10)]);
    assert_eq!(portfolio.stats(), PortfolioStats::default());
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn pet_name_falls_back_to_question_mark() {
    let pets = vec![pet(1, "a", "Rex")];
    assert_eq!(pet_name(&pets, 1), "Rex");
    assert_eq!(pet_name(&pets, 9), "?");
}
