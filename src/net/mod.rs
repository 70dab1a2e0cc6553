//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` defines the failure taxonomy shown in
//! toasts, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
