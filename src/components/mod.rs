//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational primitives (buttons, cards, badges, modal, toast) plus the
//! portal chrome (sidebar and the gated shell around owner pages). Shared
//! state is read from Leptos context providers installed by `app::App`.

pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod modal;
pub mod multi_select;
pub mod portal_shell;
pub mod sidebar;
pub mod skeleton;
pub mod toast;
