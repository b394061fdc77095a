use super::*;
use chrono::TimeZone;

#[test]
fn parses_datetime_local_input() {
    let at = parse_utc("2030-01-02T09:30").unwrap();
    assert_eq!(at, Utc.with_ymd_and_hms(2030, 1, 2, 9, 30, 0).unwrap());
}

#[test]
fn parses_naive_with_seconds_and_fraction() {
    assert_eq!(
        parse_utc("2030-01-02T09:30:15").unwrap(),
        Utc.with_ymd_and_hms(2030, 1, 2, 9, 30, 15).unwrap()
    );
    assert!(parse_utc("2030-01-02T09:30:15.1234567").is_some());
}

#[test]
fn parses_rfc3339_with_offset() {
    let at = parse_utc("2030-01-02T11:30:00+02:00").unwrap();
    assert_eq!(at, Utc.with_ymd_and_hms(2030, 1, 2, 9, 30, 0).unwrap());
}

#[test]
fn rejects_garbage_and_empty() {
    assert!(parse_utc("").is_none());
    assert!(parse_utc("tomorrow").is_none());
    assert!(parse_utc("2030-13-40T99:99").is_none());
}

#[test]
fn iso_output_is_utc_millis() {
    let at = Utc.with_ymd_and_hms(2030, 1, 2, 9, 30, 0).unwrap();
    assert_eq!(to_iso_utc(at), "2030-01-02T09:30:00.000Z");
}

#[test]
fn display_formats_parseable_values() {
    assert_eq!(display("2030-01-02T09:30:00Z"), "2030-01-02 09:30 UTC");
}

#[test]
fn display_passes_through_unparseable_values() {
    assert_eq!(display("soon"), "soon");
}
