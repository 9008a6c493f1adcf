use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn named_spec_resolves_from_json() {
    let spec: EaseSpec = serde_json::from_str("\"InQuad\"").unwrap();
    let easing = spec.resolve().unwrap();
    assert_eq!(easing.apply(0.5), 0.25);
}

fn linear_segment(start: f64, end: f64, s: f64, e: f64) -> EaseSegment {
    EaseSegment {
        start,
        end,
        s,
        c1: s + (e - s) / 3.0,
        c2: s + 2.0 * (e - s) / 3.0,
        e,
    }
}

#[test]
fn segments_find_covering_piece_and_renormalize() {
    let spec = EaseSpec::Segments(vec![
        linear_segment(0.0, 0.5, 0.0, 0.8),
        linear_segment(0.5, 1.0, 0.8, 1.0),
    ]);
    let easing = spec.resolve().unwrap();
    assert!((easing.apply(0.25) - 0.4).abs() < 1e-12);
    assert!((easing.apply(0.5) - 0.8).abs() < 1e-12);
    assert!((easing.apply(0.75) - 0.9).abs() < 1e-12);
    assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn segments_parse_from_json() {
    let json = r#"[{"start":0.0,"end":1.0,"s":0.0,"c1":0.0,"c2":1.0,"e":1.0}]"#;
    let spec: EaseSpec = serde_json::from_str(json).unwrap();
    let easing = spec.resolve().unwrap();
    assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
    assert!(easing.apply(0.25) < 0.25);
}

#[test]
fn malformed_segments_are_rejected() {
    let empty = EaseSpec::Segments(Vec::new());
    assert!(matches!(empty.resolve(), Err(EmberError::Animation(_))));

    let gap = EaseSpec::Segments(vec![
        linear_segment(0.0, 0.4, 0.0, 0.5),
        linear_segment(0.6, 1.0, 0.5, 1.0),
    ]);
    assert!(gap.resolve().is_err());

    let short = EaseSpec::Segments(vec![linear_segment(0.0, 0.9, 0.0, 1.0)]);
    assert!(short.resolve().is_err());

    let reversed = EaseSpec::Segments(vec![linear_segment(1.0, 0.0, 0.0, 1.0)]);
    assert!(reversed.resolve().is_err());
}

#[test]
fn custom_easing_is_called() {
    let easing = Easing::custom(|t| t * t * t);
    assert_eq!(easing.apply(0.5), 0.125);
    assert_eq!(format!("{easing:?}"), "Custom(..)");
}
