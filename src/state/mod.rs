//! Client-side state shared between pages and components.
//!
//! DESIGN
//! ======
//! Plain data structs wrapped in `RwSignal` by their owners. Pure reducers
//! and derivations live here so they can be unit tested without a browser.

pub mod portfolio;
pub mod session;
pub mod toast;
