//! # vetcare-portal
//!
//! Leptos + WASM client portal for pet owners of the VETCARE clinic.
//!
//! The clinic backend owns every business rule (scheduling, invoicing,
//! persistence). This crate only fetches the REST collections, narrows them
//! to the owner identified in browser storage, validates forms, and renders
//! the page chrome around those calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
