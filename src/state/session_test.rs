use super::*;

fn owner(id: &str, name: &str) -> ActiveOwner {
    ActiveOwner { id: id.to_owned(), name: name.to_owned() }
}

#[test]
fn session_default_has_no_owner() {
    let state = SessionState::default();
    assert!(state.owner.is_none());
    assert_eq!(state.owner_id(), None);
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn from_stored_requires_non_blank_id() {
    assert_eq!(SessionState::from_stored(None, Some("Ada".to_owned())), SessionState::default());
    assert_eq!(SessionState::from_stored(Some("  ".to_owned()), None), SessionState::default());
}

#[test]
fn from_stored_keeps_id_and_name() {
    let state = SessionState::from_stored(Some("o-1".to_owned()), Some("Ada".to_owned()));
    assert_eq!(state.owner, Some(owner("o-1", "Ada")));
    assert_eq!(state.owner_id(), Some("o-1"));
    assert_eq!(state.display_name(), "Ada");
}

#[test]
fn missing_name_greets_guest() {
    let state = SessionState::from_stored(Some("o-1".to_owned()), None);
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn activate_then_clear_round_trips_in_memory() {
    let mut state = SessionState::default();
    state.activate(owner("o-2", "Bea"));
    assert_eq!(state.owner_id(), Some("o-2"));
    state.clear();
    assert!(state.owner.is_none());
}

#[test]
fn active_owner_from_wire_owner() {
    let wire = Owner {
        id: "o-3".to_owned(),
        name: "Cy".to_owned(),
        email: "c@x.com".to_owned(),
        phone: "555".to_owned(),
    };
    assert_eq!(ActiveOwner::from(&wire), owner("o-3", "Cy"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_is_empty() {
    assert_eq!(SessionState::load(), SessionState::default());
}
