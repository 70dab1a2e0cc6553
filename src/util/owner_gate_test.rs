use super::*;
use crate::state::session::ActiveOwner;

#[test]
fn redirects_when_no_owner_is_active() {
    assert!(should_redirect_to_welcome(&SessionState::default()));
}

#[test]
fn blank_stored_id_counts_as_missing() {
    let state = SessionState::from_stored(Some("  ".to_owned()), Some("Ada".to_owned()));
    assert!(should_redirect_to_welcome(&state));
}

#[test]
fn stays_when_owner_is_active() {
    let state = SessionState { owner: Some(ActiveOwner { id: "o-1".to_owned(), name: "Ada".to_owned() }) };
    assert!(!should_redirect_to_welcome(&state));
}
