//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock) and
//! display formatting from page logic to improve reuse and testability.

pub mod clock;
pub mod dates;
pub mod format;
pub mod owner_gate;
pub mod storage;
pub mod timer;
