//! Owner-scoped views over the clinic collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend returns every pet, appointment and invoice in the clinic. Each
//! portal page narrows them to the active owner by chaining ownership:
//! pet -> owner, appointment -> pet, invoice -> appointment.
//!
//! DESIGN
//! ======
//! Filters preserve backend order. Owner ids are compared as strings.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use std::collections::HashSet;

use crate::net::types::{Appointment, Invoice, Pet};
use crate::util::dates::UNKNOWN;

/// Pets whose `owner_id` equals `owner_id`.
pub fn owner_pets(pets: Vec<Pet>, owner_id: &str) -> Vec<Pet> {
    pets.into_iter().filter(|p| p.owner_id == owner_id).collect()
}

/// Appointments for any pet in `pets`.
pub fn owner_appointments(appointments: Vec<Appointment>, pets: &[Pet]) -> Vec<Appointment> {
    let pet_ids: HashSet<i64> = pets.iter().map(|p| p.id).collect();
    appointments.into_iter().filter(|a| pet_ids.contains(&a.pet_id)).collect()
}

/// Invoices for any appointment in `appointments`.
pub fn owner_invoices(invoices: Vec<Invoice>, appointments: &[Appointment]) -> Vec<Invoice> {
    let appt_ids: HashSet<i64> = appointments.iter().map(|a| a.id).collect();
    invoices.into_iter().filter(|i| appt_ids.contains(&i.appointment_id)).collect()
}

/// Name of pet `pet_id`, or `?` when it is not among `pets`.
pub fn pet_name(pets: &[Pet], pet_id: i64) -> String {
    pets.iter()
        .find(|p| p.id == pet_id)
        .map_or_else(|| UNKNOWN.to_owned(), |p| p.name.clone())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortfolioStats {
    pub pets: usize,
    pub appointments: usize,
    pub invoices: usize,
}

/// Everything the active owner can see.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerPortfolio {
    pub pets: Vec<Pet>,
    pub appointments: Vec<Appointment>,
    pub invoices: Vec<Invoice>,
}

impl OwnerPortfolio {
    /// Narrow full backend collections to `owner_id`.
    pub fn scope(owner_id: &str, pets: Vec<Pet>, appointments: Vec<Appointment>, invoices: Vec<Invoice>) -> Self {
        let pets = owner_pets(pets, owner_id);
        let appointments = owner_appointments(appointments, &pets);
        let invoices = owner_invoices(invoices, &appointments);
        Self { pets, appointments, invoices }
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats {
            pets: self.pets.len(),
            appointments: self.appointments.len(),
            invoices: self.invoices.len(),
        }
    }

    pub fn appointment(&self, id: i64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }
}
