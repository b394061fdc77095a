use super::*;

#[test]
fn upstream_maps_to_bad_gateway() {
    let err = HostError::Upstream("connection refused".to_owned());
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn startup_errors_map_to_internal() {
    let err = HostError::Config { var: "PORT", reason: "bad".to_owned() };
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.to_string(), "invalid config PORT: bad");
}
