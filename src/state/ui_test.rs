use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_closed() {
    let state = UiState::default();
    assert_eq!(state.visibility, Visibility::Closed);
    assert!(!state.visibility.is_open());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_opens_closed_shell() {
    let mut state = UiState::default();
    assert_eq!(state.toggle(), Visibility::Open);
    assert!(state.visibility.is_open());
}

#[test]
fn toggle_twice_restores_original() {
    let mut state = UiState::default();
    let before = state.visibility;
    state.toggle();
    state.toggle();
    assert_eq!(state.visibility, before);
}

#[test]
fn toggle_runs_indefinitely() {
    let mut state = UiState::default();
    for i in 0..9 {
        let expected = if i % 2 == 0 { Visibility::Open } else { Visibility::Closed };
        assert_eq!(state.toggle(), expected);
    }
}

#[test]
fn visibility_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Visibility::Open).unwrap(), "\"open\"");
    assert_eq!(serde_json::to_string(&Visibility::Closed).unwrap(), "\"closed\"");
}

#[test]
fn set_visibility_reports_change() {
    let mut state = UiState::default();
    assert!(!state.set_visibility(Visibility::Closed));
    assert!(state.set_visibility(Visibility::Open));
    assert!(!state.set_visibility(Visibility::Open));
    assert!(state.visibility.is_open());
}
