use super::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn rotate_quarter_turn() {
    let v = rotate(Vec2::new(2.0, 0.0), std::f64::consts::FRAC_PI_2);
    assert!(approx(v, Vec2::new(0.0, 2.0)));
}

#[test]
fn normalize_falls_back_on_zero() {
    let fallback = Vec2::new(0.0, 1.0);
    assert_eq!(normalize_or(Vec2::ZERO, fallback), fallback);
    assert!(approx(
        normalize_or(Vec2::new(3.0, 4.0), fallback),
        Vec2::new(0.6, 0.8)
    ));
}

#[test]
fn with_length_keeps_direction() {
    let v = with_length(Vec2::new(0.0, -5.0), 2.0, Vec2::new(1.0, 0.0));
    assert!(approx(v, Vec2::new(0.0, -2.0)));
}

#[test]
fn clamp_unit_handles_nan_and_bounds() {
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(-1.0), 0.0);
    assert_eq!(clamp_unit(2.0), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
}
