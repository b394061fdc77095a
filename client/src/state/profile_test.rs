use super::*;
use crate::net::types::{DoctorProfile, PatientProfile};

fn doctor(first: &str) -> DoctorProfile {
    DoctorProfile { first_name: first.to_owned(), specialization: "ENT".to_owned(), ..DoctorProfile::default() }
}

#[test]
fn loading_constructor_marks_loading() {
    let state = ProfileState::<PatientProfile>::loading();
    assert!(state.loading);
    assert!(state.original.is_none());
}

#[test]
fn load_fills_draft_and_original() {
    let mut state = ProfileState::loading();
    assert!(state.finish_load(Ok(doctor("Ann")), Role::Doctor).is_none());
    assert!(!state.loading);
    assert_eq!(state.draft, doctor("Ann"));
    assert_eq!(state.original, Some(doctor("Ann")));
}

#[test]
fn cancel_edit_restores_original() {
    let mut state = ProfileState::default();
    let _ = state.finish_load(Ok(doctor("Ann")), Role::Doctor);
    state.start_edit();
    state.draft.first_name = "Changed".to_owned();
    state.cancel_edit();
    assert!(!state.editing);
    assert_eq!(state.draft.first_name, "Ann");
}

#[test]
fn save_success_leaves_edit_mode() {
    let mut state = ProfileState::default();
    let _ = state.finish_load(Ok(doctor("Ann")), Role::Doctor);
    state.start_edit();
    state.begin_save();
    assert!(state.saving);
    let _ = state.finish_save(Ok(doctor("Anne")), Role::Doctor);
    assert!(!state.saving);
    assert!(!state.editing);
    assert_eq!(state.original, Some(doctor("Anne")));
    assert_eq!(state.success.as_deref(), Some("Profile updated successfully"));
}

#[test]
fn save_failure_keeps_draft_and_edit_mode() {
    let mut state = ProfileState::default();
    let _ = state.finish_load(Ok(doctor("Ann")), Role::Doctor);
    state.start_edit();
    state.draft.first_name = "Draft".to_owned();
    let _ = state.finish_save(Err(ApiError::Rejected("Phone number is invalid".to_owned())), Role::Doctor);
    assert!(state.editing);
    assert_eq!(state.draft.first_name, "Draft");
    assert_eq!(state.error.as_deref(), Some("Phone number is invalid"));
}

#[test]
fn unauthorized_load_redirects() {
    let mut state = ProfileState::<PatientProfile>::loading();
    assert_eq!(state.finish_load(Err(ApiError::Unauthorized), Role::Patient), Some("/patient/login"));
}

#[test]
fn not_found_load_is_inline() {
    let mut state = ProfileState::<PatientProfile>::loading();
    let _ = state.finish_load(Err(ApiError::NotFound("x".to_owned())), Role::Patient);
    assert_eq!(state.error.as_deref(), Some("Not found"));
}
