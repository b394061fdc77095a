use super::*;
use crate::net::types::AppointmentStatus;
use chrono::TimeZone;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
}

fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment { id: id.to_owned(), status, ..Appointment::default() }
}

// =============================================================
// validate_schedule
// =============================================================

#[test]
fn past_date_is_rejected_locally() {
    let err = validate_schedule("d1", "2029-12-31T09:00", "checkup", "p1", now()).unwrap_err();
    assert_eq!(err, DATE_NOT_IN_FUTURE);
    assert!(err.contains("must be in the future"));
}

#[test]
fn present_instant_is_not_future() {
    assert_eq!(
        validate_schedule("d1", "2030-01-01T12:00", "checkup", "p1", now()),
        Err(DATE_NOT_IN_FUTURE)
    );
}

#[test]
fn blank_fields_are_required() {
    assert_eq!(validate_schedule("", "2030-02-01T09:00", "x", "p1", now()), Err(MISSING_FIELDS));
    assert_eq!(validate_schedule("d1", "", "x", "p1", now()), Err(MISSING_FIELDS));
    assert_eq!(validate_schedule("d1", "2030-02-01T09:00", "   ", "p1", now()), Err(MISSING_FIELDS));
    assert_eq!(validate_schedule("d1", "2030-02-01T09:00", "x", "", now()), Err(MISSING_FIELDS));
}

#[test]
fn unparseable_date_is_reported() {
    assert_eq!(validate_schedule("d1", "next week", "x", "p1", now()), Err(INVALID_DATE));
}

#[test]
fn future_date_builds_iso_request() {
    let req = validate_schedule(" d1 ", "2030-02-01T09:30", " checkup ", "p1", now()).unwrap();
    assert_eq!(
        req,
        NewAppointment {
            patient_id: "p1".to_owned(),
            doctor_id: "d1".to_owned(),
            appointment_date: "2030-02-01T09:30:00.000Z".to_owned(),
            reason: "checkup".to_owned(),
        }
    );
}

#[test]
fn schedule_form_delegates_to_validation() {
    let form = ScheduleForm {
        doctor_id: "d1".to_owned(),
        appointment_date: "2020-01-01T00:00".to_owned(),
        reason: "x".to_owned(),
        ..ScheduleForm::default()
    };
    assert_eq!(form.to_request("p1", now()), Err(DATE_NOT_IN_FUTURE));
}

#[test]
fn doctor_list_failure_falls_back_to_manual_entry() {
    let mut form = ScheduleForm::default();
    form.set_doctors(Err(ApiError::Network("offline".to_owned())));
    assert!(form.doctors_failed);
    form.set_doctors(Ok(vec![DoctorSummary::default()]));
    assert!(!form.doctors_failed);
    assert_eq!(form.doctors.len(), 1);
}

#[test]
fn reset_clears_inputs() {
    let mut form = ScheduleForm {
        doctor_id: "d1".to_owned(),
        reason: "x".to_owned(),
        error: Some("bad".to_owned()),
        ..ScheduleForm::default()
    };
    form.reset();
    assert!(form.doctor_id.is_empty());
    assert!(form.reason.is_empty());
    assert!(form.error.is_none());
}

// =============================================================
// Actions
// =============================================================

#[test]
fn patients_may_only_cancel_scheduled() {
    let scheduled = appointment("a1", AppointmentStatus::Scheduled);
    assert_eq!(AppointmentAction::available(&scheduled, Role::Patient), vec![AppointmentAction::Cancel]);
    let done = appointment("a2", AppointmentStatus::Completed);
    assert!(AppointmentAction::available(&done, Role::Patient).is_empty());
}

#[test]
fn doctors_may_complete_or_cancel_scheduled() {
    let scheduled = appointment("a1", AppointmentStatus::Scheduled);
    assert_eq!(
        AppointmentAction::available(&scheduled, Role::Doctor),
        vec![AppointmentAction::Complete, AppointmentAction::Cancel]
    );
    let cancelled = appointment("a2", AppointmentStatus::Cancelled);
    assert!(AppointmentAction::available(&cancelled, Role::Doctor).is_empty());
}

// =============================================================
// AppointmentsState
// =============================================================

#[test]
fn load_success_replaces_items() {
    let mut state = AppointmentsState::default();
    state.begin_load();
    assert!(state.loading);
    let redirect = state.finish_load(Ok(vec![appointment("a1", AppointmentStatus::Scheduled)]), Role::Patient);
    assert!(redirect.is_none());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn load_unauthorized_redirects_to_login() {
    let mut state = AppointmentsState::default();
    state.begin_load();
    assert_eq!(state.finish_load(Err(ApiError::Unauthorized), Role::Doctor), Some("/doctor/login"));
    assert!(state.error.is_none());
}

#[test]
fn load_failure_is_inline() {
    let mut state = AppointmentsState::default();
    let _ = state.finish_load(Err(ApiError::Network("x".to_owned())), Role::Patient);
    assert_eq!(state.error.as_deref(), Some("Failed to load appointments"));
}

#[test]
fn double_cancel_reports_already_processed() {
    let mut state = AppointmentsState::default();
    state.begin_action("a1");
    assert_eq!(state.pending.as_deref(), Some("a1"));
    let redirect = state.finish_action(
        AppointmentAction::Cancel,
        Err(ApiError::Rejected("Appointment is already cancelled".to_owned())),
        Role::Patient,
    );
    assert!(redirect.is_none());
    assert!(state.pending.is_none());
    assert_eq!(state.error.as_deref(), Some("This appointment was already processed"));
}

#[test]
fn forbidden_complete_is_not_allowed_message() {
    let mut state = AppointmentsState::default();
    let _ = state.finish_action(AppointmentAction::Complete, Err(ApiError::Forbidden), Role::Patient);
    assert_eq!(state.error.as_deref(), Some("Not allowed"));
}

#[test]
fn action_success_sets_notice() {
    let mut state = AppointmentsState::default();
    state.begin_action("a1");
    let _ = state.finish_action(AppointmentAction::Complete, Ok(()), Role::Doctor);
    assert_eq!(state.notice.as_deref(), Some("Appointment marked completed"));
    assert!(state.error.is_none());
}
