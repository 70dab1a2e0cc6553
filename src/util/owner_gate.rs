//! Route gate for pages that require an active owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every portal page except the welcome and owners routes applies the same
//! rule: with no owner recorded in the session, go back to `/`.

#[cfg(test)]
#[path = "owner_gate_test.rs"]
mod owner_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const WELCOME_PATH: &str = "/";

pub fn should_redirect_to_welcome(state: &SessionState) -> bool {
    state.owner_id().is_none()
}

/// Redirect to the welcome page whenever the session has no active owner.
pub fn install_owner_gate<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_welcome(&session.get()) {
            navigate(WELCOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
