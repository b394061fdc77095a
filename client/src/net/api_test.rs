use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Config
// =============================================================

#[test]
fn config_defaults_to_proxy_prefix() {
    let cfg = ApiConfig::from_values(None, None);
    assert_eq!(cfg.base_url, "/api-backend");
    assert_eq!(cfg.casing, PathCasing::Lower);
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn config_trims_trailing_slash() {
    let cfg = ApiConfig::from_values(Some("https://localhost:7081/"), Some("PASCAL"));
    assert_eq!(cfg.base_url, "https://localhost:7081");
    assert_eq!(cfg.casing, PathCasing::Pascal);
}

#[test]
fn config_blank_base_url_falls_back() {
    assert_eq!(ApiConfig::from_values(Some("   "), None).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn unknown_casing_is_lower() {
    assert_eq!(PathCasing::parse(Some("kebab")), PathCasing::Lower);
}

#[test]
fn url_joins_base_and_path() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.url("/api/doctors"), "/api-backend/api/doctors");
}

// =============================================================
// Routes
// =============================================================

#[test]
fn lower_case_routes() {
    let routes = ApiConfig::default().routes();
    assert_eq!(routes.login(Role::Patient), "/api/patients/login");
    assert_eq!(routes.login(Role::Doctor), "/api/doctors/login");
    assert_eq!(routes.register(Role::Doctor), "/api/doctors/register");
    assert_eq!(routes.profile(Role::Patient, "p1"), "/api/patients/p1");
    assert_eq!(routes.appointments_for(Role::Patient, "p1"), "/api/appointments/patient/p1");
    assert_eq!(routes.appointments_for(Role::Doctor, "d1"), "/api/appointments/doctor/d1");
    assert_eq!(routes.appointments(), "/api/appointments");
    assert_eq!(routes.cancel_appointment("a1"), "/api/appointments/a1/cancel");
    assert_eq!(routes.complete_appointment("a1"), "/api/appointments/a1/complete");
    assert_eq!(routes.doctors(), "/api/doctors");
}

#[test]
fn pascal_case_routes_only_touch_collections() {
    let routes = ApiConfig::from_values(None, Some("pascal")).routes();
    assert_eq!(routes.login(Role::Patient), "/api/Patients/login");
    assert_eq!(routes.appointments_for(Role::Doctor, "d1"), "/api/Appointments/doctor/d1");
    assert_eq!(routes.cancel_appointment("a1"), "/api/Appointments/a1/cancel");
}

#[test]
fn bearer_header_format() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

// =============================================================
// Body helpers
// =============================================================

#[test]
fn parse_body_empty_reads_as_null() {
    let parsed: Option<Vec<Appointment>> = parse_body("").unwrap();
    assert!(parsed.is_none());
}

#[test]
fn parse_body_reports_decode_errors() {
    let err = parse_body::<Vec<Appointment>>("{not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn parse_or_keeps_sent_value_on_empty_body() {
    let sent = DoctorProfile { first_name: "Ann".to_owned(), ..DoctorProfile::default() };
    assert_eq!(parse_or("", &sent), sent);
}

#[test]
fn parse_or_prefers_server_copy() {
    let sent = DoctorProfile { first_name: "Ann".to_owned(), ..DoctorProfile::default() };
    let stored = parse_or(r#"{"firstName":"Anne","specialization":"ENT"}"#, &sent);
    assert_eq!(stored.first_name, "Anne");
    assert_eq!(stored.specialization, "ENT");
}

// =============================================================
// Server-side stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let client = ApiClient::new(ApiConfig::default(), TokenStore::new(MemoryStorage::new()));
    let result = futures::executor::block_on(client.list_doctors());
    assert_eq!(result, Err(ApiError::Unavailable));
    let login = futures::executor::block_on(client.login(Role::Patient, &Credentials::default()));
    assert_eq!(login, Err(ApiError::Unavailable));
}
