// File: crates/burndown-core/tests/dates.rs
// Purpose: Date grammar and deserialization of the two input documents.

use burndown_core::{parse_date, BurndownData, BurndownError, RawDate, ReleaseScheduleMap};

const MAR_1_2015_MS: f64 = 1_425_168_000_000.0;

#[test]
fn bare_date_is_utc_midnight() {
    assert_eq!(parse_date("2015-03-01").unwrap(), MAR_1_2015_MS);
    assert_eq!(parse_date("  2015-03-01 ").unwrap(), MAR_1_2015_MS);
}

#[test]
fn datetime_variants() {
    assert_eq!(parse_date("2015-03-01T00:00:00Z").unwrap(), MAR_1_2015_MS);
    assert_eq!(parse_date("2015-03-01T12:30:00+02:00").unwrap(), 1_425_205_800_000.0);
    assert_eq!(parse_date("2015-03-01 10:30:00").unwrap(), 1_425_205_800_000.0);
    assert_eq!(parse_date("2015-03-01T10:30:00").unwrap(), 1_425_205_800_000.0);
    assert_eq!(parse_date("2015-03-01T10:30").unwrap(), 1_425_205_800_000.0);
    assert_eq!(parse_date("2015-03-01T00:00:00.250").unwrap(), MAR_1_2015_MS + 250.0);
}

#[test]
fn malformed_dates_fail_loudly() {
    for bad in ["", "yesterday", "2015-13-01", "01/03/2015", "2015-03-01T25:00:00"] {
        match parse_date(bad) {
            Err(BurndownError::MalformedDate { input }) => assert_eq!(input, bad),
            other => panic!("expected MalformedDate for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn numeric_dates_are_epoch_millis() {
    assert_eq!(RawDate::Millis(MAR_1_2015_MS).to_timestamp().unwrap(), MAR_1_2015_MS);
    assert!(matches!(
        RawDate::Millis(f64::INFINITY).to_timestamp(),
        Err(BurndownError::NonFiniteTimestamp(_))
    ));
}

#[test]
fn release_map_from_json() {
    let json = r#"{
        "15.2": { "start": "2015-01-05", "rcs": "2015-02-16", "target": "2015-03-02" },
        "15.4": { "start": "2015-03-02", "rcs": "not a date", "target": "2015-05-04" }
    }"#;
    let map: ReleaseScheduleMap = serde_json::from_str(json).expect("parse releases");
    assert!(map.contains("15.2"));
    assert_eq!(map.release_names().collect::<Vec<_>>(), vec!["15.2", "15.4"]);

    let s = map.lookup("15.2").unwrap().expect("known release");
    assert_eq!(s.start, 1_420_416_000_000.0);
    assert_eq!(s.rcs_freeze, 1_424_044_800_000.0);
    assert_eq!(s.target, 1_425_254_400_000.0);

    assert_eq!(map.lookup("99.9").unwrap(), None);
    // Only the release being drawn has its dates parsed.
    assert!(matches!(map.lookup("15.4"), Err(BurndownError::MalformedDate { .. })));
}

#[test]
fn burndown_data_from_json() {
    let json = r#"{ "to_burn": 42, "closed": [["2015-01-05", 42], [1420502400000, 40]] }"#;
    let data: BurndownData = serde_json::from_str(json).expect("parse data");
    assert_eq!(data.to_burn, 42);
    assert_eq!(data.closed.len(), 2);
    assert_eq!(data.closed[0], (RawDate::Text("2015-01-05".into()), 42));
    assert_eq!(data.closed[1], (RawDate::Millis(1_420_502_400_000.0), 40));
}

#[test]
fn burndown_data_closed_may_be_absent() {
    let data: BurndownData = serde_json::from_str(r#"{ "to_burn": 7 }"#).expect("parse data");
    assert!(!data.has_samples());
}
