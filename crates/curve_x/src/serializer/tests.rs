use super::*;

fn sample_curve() -> Curve {
    Curve::from_keys(vec![
        CurveKey::with_tangents(
            Point::new(0.0, 1.0),
            Point::new(-0.25, 0.0),
            Point::new(0.25, 0.0),
            TangentMode::Mirrored,
        ),
        CurveKey::with_tangents(
            Point::new(0.5, 0.3),
            Point::new(-0.1, 0.2),
            Point::new(0.3, -0.6),
            TangentMode::Aligned,
        ),
        CurveKey::with_tangents(
            Point::new(1.0, 0.0),
            Point::new(-1.0 / 3.0, 0.125),
            Point::new(7.5, -2.0),
            TangentMode::Broken,
        ),
    ])
}

#[test]
fn test_serialize_layout() {
    let curve = Curve::from_keys(vec![
        CurveKey::new(Point::new(0.0, 1.0)),
        CurveKey::with_tangents(
            Point::new(1.0, 0.0),
            Point::new(-0.5, 0.25),
            Point::new(0.5, -0.25),
            TangentMode::Aligned,
        ),
    ]);

    let text = serialize(&curve);
    assert_eq!(text, "version:1\n0:0,1,0,0,0,0,0\n1:1,0,-0.5,0.25,0.5,-0.25,1\n");
}

#[test]
fn test_roundtrip_is_lossless() {
    let curve = sample_curve();
    let restored = unserialize(&serialize(&curve)).expect("Roundtrip erwartet");

    assert_eq!(restored.keys_count(), curve.keys_count());
    for (a, b) in curve.keys().iter().zip(restored.keys()) {
        assert_eq!(a.control.x.to_bits(), b.control.x.to_bits());
        assert_eq!(a.left_tangent.x.to_bits(), b.left_tangent.x.to_bits());
        assert_eq!(a.right_tangent.y.to_bits(), b.right_tangent.y.to_bits());
        assert_eq!(a.tangent_mode, b.tangent_mode);
    }
    assert_eq!(restored, curve);
    assert!(restored.is_length_dirty(), "Geladene Kurve muss Länge neu berechnen");
}

#[test]
fn test_unserialize_tolerates_crlf_and_blank_lines() {
    let text = "\r\nversion:1\r\n\r\n0:0,1,0,0,0,0,0\r\n1: 1, 0, 0, 0, 0, 0, 2\r\n\n";
    let curve = unserialize(text).expect("CRLF-Datei lesbar");

    assert_eq!(curve.keys_count(), 2);
    assert_eq!(curve.keys()[1].tangent_mode, TangentMode::Broken);
}

#[test]
fn test_unserialize_empty_keys_gives_invalid_curve() {
    let curve = unserialize("version:1\n").expect("Nur Header ist gültig");
    assert_eq!(curve.keys_count(), 0);
    assert!(!curve.is_valid());
}

#[test]
fn test_unserialize_rejects_missing_or_bad_version() {
    assert_eq!(unserialize("").unwrap_err(), FormatError::MissingVersion);
    assert_eq!(unserialize(" \n\n").unwrap_err(), FormatError::MissingVersion);

    assert_eq!(
        unserialize("0:0,1,0,0,0,0,0\n").unwrap_err(),
        FormatError::InvalidVersion {
            line: 1,
            content: "0:0,1,0,0,0,0,0".to_string()
        }
    );
    assert!(matches!(
        unserialize("version:abc\n").unwrap_err(),
        FormatError::InvalidVersion { line: 1, .. }
    ));
    assert_eq!(
        unserialize("version:2\n").unwrap_err(),
        FormatError::UnsupportedVersion {
            found: 2,
            expected: FORMAT_VERSION
        }
    );
}

#[test]
fn test_unserialize_rejects_malformed_key_lines() {
    assert!(matches!(
        unserialize("version:1\n0;0,1,0,0,0,0,0\n").unwrap_err(),
        FormatError::MalformedKeyLine { line: 2, .. }
    ));
    assert!(matches!(
        unserialize("version:1\n0:0,1,0,0,0,0\n").unwrap_err(),
        FormatError::MalformedKeyLine { line: 2, .. }
    ));
    assert!(matches!(
        unserialize("version:1\nx:0,1,0,0,0,0,0\n").unwrap_err(),
        FormatError::MalformedKeyLine { line: 2, .. }
    ));
    assert_eq!(
        unserialize("version:1\n0:0,1,0,0,0,0,0\n2:1,0,0,0,0,0,0\n").unwrap_err(),
        FormatError::UnexpectedKeyIndex {
            line: 3,
            expected: 1,
            found: 2
        }
    );
    assert_eq!(
        unserialize("version:1\n0:0,eins,0,0,0,0,0\n").unwrap_err(),
        FormatError::InvalidNumber {
            line: 2,
            value: "eins".to_string()
        }
    );
}

#[test]
fn test_unserialize_rejects_out_of_range_tangent_mode() {
    for mode in ["3", "-1", "1.0", ""] {
        let text = format!("version:1\n0:0,1,0,0,0,0,{mode}\n");
        assert_eq!(
            unserialize(&text).unwrap_err(),
            FormatError::InvalidTangentMode {
                line: 2,
                value: mode.to_string()
            },
            "Modus '{mode}' muss abgelehnt werden"
        );
    }
}

#[test]
fn test_with_format_extension() {
    assert_eq!(
        with_format_extension(Path::new("curves/a.cvx")),
        PathBuf::from("curves/a.cvx")
    );
    assert_eq!(
        with_format_extension(Path::new("curves/a.txt")),
        PathBuf::from("curves/a.cvx")
    );
    assert_eq!(
        with_format_extension(Path::new("curves/a")),
        PathBuf::from("curves/a.cvx")
    );
    assert_eq!(
        with_format_extension(Path::new("A.CVX")),
        PathBuf::from("A.CVX")
    );
}
