use curve_x::{serialize, unserialize, FormatError, Point, TangentMode};

const FIXTURE: &str = include_str!("test.cvx");

#[test]
fn test_fixture_parses_with_all_tangent_modes() {
    let curve = unserialize(FIXTURE).expect("Fixture sollte gültig sein");

    assert_eq!(curve.keys_count(), 3);
    assert!(curve.is_valid());
    let modes: Vec<TangentMode> = curve.keys().iter().map(|k| k.tangent_mode).collect();
    assert_eq!(
        modes,
        vec![TangentMode::Mirrored, TangentMode::Aligned, TangentMode::Broken]
    );
    assert_eq!(curve.keys()[1].control, Point::new(0.5, 0.8));
}

#[test]
fn test_fixture_roundtrip_is_byte_identical() {
    let curve = unserialize(FIXTURE).expect("Fixture sollte gültig sein");

    assert_eq!(serialize(&curve), FIXTURE);
}

#[test]
fn test_fixture_evaluation_endpoints() {
    let mut curve = unserialize(FIXTURE).expect("Fixture sollte gültig sein");

    assert_eq!(
        curve.evaluate_by_percent(0.0).expect("gültig"),
        Point::new(0.0, 0.0)
    );
    assert_eq!(
        curve.evaluate_by_percent(1.0).expect("gültig"),
        Point::new(1.0, 0.25)
    );
    assert_eq!(curve.evaluate_by_time(-1.0).expect("gültig"), 0.0);
    assert_eq!(curve.evaluate_by_time(2.0).expect("gültig"), 0.25);

    let length = curve.length();
    let end = curve.evaluate_by_distance(length).expect("gültig");
    assert_eq!(end, Point::new(1.0, 0.25));
}

#[test]
fn test_file_roundtrip_through_temp_dir() {
    let curve = unserialize(FIXTURE).expect("Fixture sollte gültig sein");
    let path = std::env::temp_dir().join("curve_editor_x_roundtrip.cvx");

    std::fs::write(&path, serialize(&curve)).expect("Schreiben erwartet");
    let text = std::fs::read_to_string(&path).expect("Lesen erwartet");
    let _ = std::fs::remove_file(&path);

    assert_eq!(unserialize(&text).expect("Roundtrip erwartet"), curve);
}

#[test]
fn test_truncated_fixture_is_rejected_atomically() {
    let truncated = &FIXTURE[..FIXTURE.len() - 4];

    let err = unserialize(truncated).expect_err("abgeschnittene Zeile muss scheitern");

    assert!(matches!(
        err,
        FormatError::MalformedKeyLine { line: 4, .. } | FormatError::InvalidTangentMode { line: 4, .. }
    ));
}
