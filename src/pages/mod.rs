//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, owner scoping, form
//! submission) and delegates rendering details to `components`. Pure helpers
//! stay next to their page and are unit tested in sibling `*_test.rs` files.

pub mod appointments;
pub mod book_appointment;
pub mod dashboard;
pub mod invoices;
pub mod owners;
pub mod pets;
pub mod welcome;
