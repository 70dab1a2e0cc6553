use super::*;
use crate::net::types::{AppointmentStatus, Service};

fn appointment(id: i64, status: AppointmentStatus, prices: &[f64]) -> Appointment {
    Appointment {
        id,
        pet_id: 1,
        vet_name: "Dr. Lee".to_owned(),
        datetime: "2026-03-05T14:30:00".to_owned(),
        status,
        services: prices
            .iter()
            .enumerate()
            .map(|(i, price)| Service { id: i64::try_from(i).unwrap(), name: format!("S{i}"), price: *price })
            .collect(),
    }
}

fn invoice(id: i64, appointment_id: i64, total: Option<f64>, paid: bool) -> Invoice {
    Invoice { id, appointment_id, total, paid, notes: None }
}

// =============================================================
// Display total
// =============================================================

#[test]
fn display_total_prefers_service_sum() {
    let appt = appointment(10, AppointmentStatus::Done, &[45.0, 30.5]);
    let inv = invoice(1, 10, Some(99.0), false);
    assert!((invoice_display_total(&inv, Some(&appt)) - 75.5).abs() < f64::EPSILON);
}

#[test]
fn display_total_falls_back_to_stored_total() {
    let appt = appointment(10, AppointmentStatus::Done, &[]);
    let inv = invoice(1, 10, Some(60.0), false);
    assert!((invoice_display_total(&inv, Some(&appt)) - 60.0).abs() < f64::EPSILON);
    assert!((invoice_display_total(&inv, None) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn display_total_is_zero_without_any_amount() {
    let inv = invoice(1, 10, None, false);
    assert!(invoice_display_total(&inv, None).abs() < f64::EPSILON);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_count_sum_and_paid() {
    let appts = vec![
        appointment(10, AppointmentStatus::Done, &[45.0]),
        appointment(11, AppointmentStatus::Done, &[]),
    ];
    let invoices = vec![invoice(1, 10, None, true), invoice(2, 11, Some(20.0), false)];
    let stats = InvoiceStats::compute(&invoices, &appts);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.paid, 1);
    assert!((stats.total_amount - 65.0).abs() < f64::EPSILON);
}

#[test]
fn stats_for_no_invoices_are_zero() {
    assert_eq!(InvoiceStats::compute(&[], &[]), InvoiceStats::default());
}

// =============================================================
// Generation candidates
// =============================================================

#[test]
fn uninvoiced_completed_skips_scheduled_and_invoiced() {
    let appts = vec![
        appointment(10, AppointmentStatus::Done, &[]),
        appointment(11, AppointmentStatus::Scheduled, &[]),
        appointment(12, AppointmentStatus::Done, &[]),
    ];
    let invoices = vec![invoice(1, 10, None, false)];
    let candidates = uninvoiced_completed(&appts, &invoices);
    assert_eq!(candidates.iter().map(|a| a.id).collect::<Vec<_>>(), vec![12]);
}

#[test]
fn generate_option_label_names_pet_and_day() {
    let pets = vec![Pet {
        id: 1,
        owner_id: "o-1".to_owned(),
        name: "Rex".to_owned(),
        species: "Dog".to_owned(),
        breed: None,
        dob: None,
    }];
    let appt = appointment(12, AppointmentStatus::Done, &[]);
    assert_eq!(generate_option_label(&appt, &pets), "Appt #12 - Rex - Dr. Lee (Mar 5, 2026)");
}

#[test]
fn paid_badge_text() {
    assert_eq!(paid_badge(true), (BadgeVariant::Success, "✓ PAID"));
    assert_eq!(paid_badge(false), (BadgeVariant::Warning, "PENDING"));
}
