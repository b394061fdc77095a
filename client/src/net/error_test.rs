use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn status_401_is_unauthorized() {
    assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
}

#[test]
fn status_403_is_forbidden() {
    assert_eq!(ApiError::from_response(403, r#"{"message":"nope"}"#), ApiError::Forbidden);
}

#[test]
fn status_404_keeps_message() {
    assert_eq!(
        ApiError::from_response(404, r#"{"message":"Patient not found"}"#),
        ApiError::NotFound("Patient not found".to_owned())
    );
}

#[test]
fn status_400_reads_message_field() {
    assert_eq!(
        ApiError::from_response(400, r#"{"message":"Email already registered"}"#),
        ApiError::Rejected("Email already registered".to_owned())
    );
}

#[test]
fn status_400_reads_problem_details_title() {
    assert_eq!(
        ApiError::from_response(400, r#"{"title":"One or more validation errors occurred."}"#),
        ApiError::Rejected("One or more validation errors occurred.".to_owned())
    );
}

#[test]
fn status_400_reads_plain_text_body() {
    assert_eq!(
        ApiError::from_response(400, "Appointment is already cancelled"),
        ApiError::Rejected("Appointment is already cancelled".to_owned())
    );
}

#[test]
fn status_400_reads_json_string_body() {
    assert_eq!(
        ApiError::from_response(400, r#""Bad date""#),
        ApiError::Rejected("Bad date".to_owned())
    );
}

#[test]
fn status_400_empty_body_uses_default_text() {
    assert_eq!(ApiError::from_response(400, "  "), ApiError::Rejected("request rejected".to_owned()));
}

#[test]
fn status_500_is_generic() {
    assert_eq!(
        ApiError::from_response(500, ""),
        ApiError::Status { status: 500, message: String::new() }
    );
}

// =============================================================
// Classification
// =============================================================

#[test]
fn already_substring_detects_double_cancel() {
    let err = ApiError::Rejected("Appointment ALREADY cancelled".to_owned());
    assert!(err.is_already_processed());
    assert_eq!(err.user_message("Cancel failed"), "This appointment was already processed");
}

#[test]
fn other_rejections_are_shown_verbatim() {
    let err = ApiError::Rejected("Reason is required".to_owned());
    assert!(!err.is_already_processed());
    assert_eq!(err.user_message("Cancel failed"), "Reason is required");
}

#[test]
fn network_failure_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Failed to load"), "Failed to load");
}

#[test]
fn forbidden_message_is_not_allowed() {
    assert_eq!(ApiError::Forbidden.user_message("x"), "Not allowed");
}

#[test]
fn status_with_message_surfaces_it() {
    let err = ApiError::Status { status: 503, message: "maintenance".to_owned() };
    assert_eq!(err.user_message("x"), "maintenance");
}

// =============================================================
// outcome
// =============================================================

#[test]
fn unauthorized_redirects_to_audience_login() {
    assert_eq!(ApiError::Unauthorized.outcome(Role::Doctor, "x"), ErrorOutcome::Redirect("/doctor/login"));
    assert_eq!(ApiError::Unauthorized.outcome(Role::Patient, "x"), ErrorOutcome::Redirect("/patient/login"));
}

#[test]
fn forbidden_is_inline() {
    assert_eq!(
        ApiError::Forbidden.outcome(Role::Patient, "x"),
        ErrorOutcome::Inline("Not allowed".to_owned())
    );
}

#[test]
fn not_found_is_inline() {
    assert_eq!(
        ApiError::NotFound("gone".to_owned()).outcome(Role::Doctor, "x"),
        ErrorOutcome::Inline("Not found".to_owned())
    );
}
