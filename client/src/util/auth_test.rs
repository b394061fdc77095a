use super::*;
use crate::util::claims::Identity;

fn signed_in(role: Option<Role>) -> AuthState {
    AuthState {
        token: Some("t".to_owned()),
        identity: Identity { id: Some("u1".to_owned()), role, email: None },
        user: None,
        loading: false,
    }
}

#[test]
fn no_token_redirects_to_required_login() {
    let state = AuthState::signed_out();
    assert_eq!(evaluate_guard(&state, Some(Role::Doctor)), GuardOutcome::Redirect("/doctor/login"));
    assert_eq!(evaluate_guard(&state, Some(Role::Patient)), GuardOutcome::Redirect("/patient/login"));
}

#[test]
fn no_token_without_required_role_goes_to_patient_login() {
    assert_eq!(evaluate_guard(&AuthState::signed_out(), None), GuardOutcome::Redirect("/patient/login"));
}

#[test]
fn wrong_role_redirects_home() {
    let state = signed_in(Some(Role::Patient));
    assert_eq!(evaluate_guard(&state, Some(Role::Doctor)), GuardOutcome::Redirect("/"));
}

#[test]
fn unknown_role_does_not_pass_role_check() {
    let state = signed_in(None);
    assert_eq!(evaluate_guard(&state, Some(Role::Patient)), GuardOutcome::Redirect("/"));
    assert_eq!(evaluate_guard(&state, None), GuardOutcome::Allow);
}

#[test]
fn matching_role_is_allowed() {
    let state = signed_in(Some(Role::Doctor));
    assert_eq!(evaluate_guard(&state, Some(Role::Doctor)), GuardOutcome::Allow);
    assert_eq!(guard_phase(&state, Some(Role::Doctor)), GuardPhase::Allowed);
}

#[test]
fn loading_state_is_unresolved() {
    let state = AuthState::default();
    assert_eq!(guard_phase(&state, Some(Role::Doctor)), GuardPhase::Unresolved);
    assert_eq!(guard_phase(&state, None), GuardPhase::Unresolved);
}

#[test]
fn resolved_failure_is_redirecting() {
    assert_eq!(
        guard_phase(&AuthState::signed_out(), Some(Role::Doctor)),
        GuardPhase::Redirecting("/doctor/login")
    );
}

#[test]
fn logout_on_protected_page_has_single_destination() {
    use crate::state::auth::SessionContext;
    use crate::state::token::TokenStore;
    use crate::util::claims::ClaimRules;
    use crate::util::storage::MemoryStorage;

    let session = SessionContext::new(TokenStore::new(MemoryStorage::new()), ClaimRules::default());
    session.tokens().store(Some("t"));
    let after = session.logout();

    assert_eq!(guard_phase(&after, Some(Role::Doctor)), GuardPhase::Redirecting("/doctor/login"));
    assert_eq!(guard_phase(&after, Some(Role::Patient)), GuardPhase::Redirecting("/patient/login"));
}
