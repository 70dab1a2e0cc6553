use super::*;

#[test]
fn toast_state_defaults_empty() {
    assert!(ToastState::default().current.is_none());
}

#[test]
fn show_replaces_current_and_increments_seq() {
    let mut state = ToastState::default();
    let first = state.error("Failed to load pets");
    let second = state.success("Pet added successfully!");
    assert!(second > first);
    let current = state.current.clone().unwrap();
    assert_eq!(current.kind, ToastKind::Success);
    assert_eq!(current.text, "Pet added successfully!");
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let old = state.info("Appointment cancelled");
    let new = state.error("Failed to update appointment");
    assert!(!state.dismiss(old));
    assert_eq!(state.current.as_ref().map(|t| t.seq), Some(new));
    assert!(state.dismiss(new));
    assert!(state.current.is_none());
}

#[test]
fn kind_modifiers_are_distinct() {
    assert_eq!(ToastKind::Success.modifier(), "toast--success");
    assert_eq!(ToastKind::Error.modifier(), "toast--error");
    assert_eq!(ToastKind::Info.modifier(), "toast--info");
}
