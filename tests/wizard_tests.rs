//! Tests for the wizard state machine and step indicators
//!
//! These tests verify:
//! - Linear step sequencing and guarded forward transitions
//! - Unconditional backward transitions
//! - Stepper indicator classification for every (step, current) pair
//! - Reset behavior

use qrwizard::app::AppState;
use qrwizard::result_store::ResultStore;
use qrwizard::types::ContentType;
use qrwizard::wizard::{StepIndicator, WizardStep};

// =============================================================================
// Guarded forward transitions
// =============================================================================

#[test]
fn test_initial_step_is_select_type() {
    let state = AppState::default();
    assert_eq!(state.step, WizardStep::SelectType);
    assert!(state.data.selected_type.is_none());
}

#[test]
fn test_advance_without_selection_fails() {
    let mut state = AppState::default();
    let err = state.advance().unwrap_err();
    assert_eq!(err.to_string(), "Please select a QR code type");
    assert_eq!(state.step, WizardStep::SelectType);
}

#[test]
fn test_advance_with_selection_reaches_content() {
    let mut state = AppState::default();
    state.choose_card();
    assert_eq!(state.data.selected_type, Some(ContentType::Url));
    state.advance().unwrap();
    assert_eq!(state.step, WizardStep::Content);
}

#[test]
fn test_advance_from_content_requires_valid_fields() {
    let mut state = AppState::default();
    state.choose_card();
    state.advance().unwrap();

    assert!(state.advance().is_err());
    assert_eq!(state.step, WizardStep::Content);

    state.data.content.url_data = "https://example.com".to_string();
    state.advance().unwrap();
    assert_eq!(state.step, WizardStep::Design);
}

#[test]
fn test_advance_is_noop_on_design_and_result() {
    // Step 3 -> 4 happens only through a successful generation
    let mut state = AppState::default();
    state.data.selected_type = Some(ContentType::Url);
    state.go_to_step(WizardStep::Design);
    state.advance().unwrap();
    assert_eq!(state.step, WizardStep::Design);
}

// =============================================================================
// Backward transitions
// =============================================================================

#[test]
fn test_back_is_unguarded_from_every_step() {
    let mut state = AppState::default();
    state.go_to_step(WizardStep::Result);
    state.go_back();
    assert_eq!(state.step, WizardStep::Design);
    state.go_back();
    assert_eq!(state.step, WizardStep::Content);
    state.go_back();
    assert_eq!(state.step, WizardStep::SelectType);
    // Already at the first step; going back stays put
    state.go_back();
    assert_eq!(state.step, WizardStep::SelectType);
}

#[test]
fn test_go_to_step_is_idempotent() {
    let mut state = AppState::default();
    state.go_to_step(WizardStep::Design);
    let first = state.clone();
    state.go_to_step(WizardStep::Design);
    assert_eq!(state.step, first.step);
    assert_eq!(state.focus, first.focus);
}

#[test]
fn test_go_to_step_resets_field_focus() {
    let mut state = AppState::default();
    state.data.selected_type = Some(ContentType::Wifi);
    state.go_to_step(WizardStep::Content);
    state.move_focus(true);
    state.move_focus(true);
    assert_eq!(state.focus, 2);
    state.go_to_step(WizardStep::Design);
    assert_eq!(state.focus, 0);
}

// =============================================================================
// Stepper indicators
// =============================================================================

#[test]
fn test_indicator_matrix_for_all_current_steps() {
    for current in WizardStep::all() {
        for step in WizardStep::all() {
            let expected = if step.step_number() < current.step_number() {
                StepIndicator::Completed
            } else if step == current {
                StepIndicator::Active
            } else {
                StepIndicator::Upcoming
            };
            assert_eq!(StepIndicator::for_step(*step, *current), expected);
        }
    }
}

#[test]
fn test_exactly_one_active_indicator() {
    for current in WizardStep::all() {
        let active = WizardStep::all()
            .iter()
            .filter(|s| StepIndicator::for_step(**s, *current) == StepIndicator::Active)
            .count();
        assert_eq!(active, 1);
    }
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_restores_initial_state() {
    let mut state = AppState::default();
    let mut store = ResultStore::new();

    state.move_card_selection(true);
    state.choose_card();
    state.advance().unwrap();
    state.data.content.wifi_ssid = "HomeNet".to_string();
    state.advance().unwrap();
    store.bind(b"image").unwrap();

    state.reset(&mut store);

    assert_eq!(state.step, WizardStep::SelectType);
    assert!(state.data.selected_type.is_none());
    assert!(state.data.content.wifi_ssid.is_empty());
    assert_eq!(state.card_selection, 0);
    assert!(!state.generating);
    assert!(!store.has_result());
}
