use crate::foundation::core::Vec2;

/// Rotate `v` counter-clockwise by `angle_rad`.
pub fn rotate(v: Vec2, angle_rad: f64) -> Vec2 {
    let (s, c) = angle_rad.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Unit vector of `v`, or `fallback` when `v` has no usable length.
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > f64::EPSILON && len.is_finite() {
        v / len
    } else {
        fallback
    }
}

/// `v` scaled to length `len`, keeping its direction.
pub fn with_length(v: Vec2, len: f64, fallback_dir: Vec2) -> Vec2 {
    normalize_or(v, fallback_dir) * len
}

/// Clamp an age fraction into `[0, 1]`. NaN maps to 0.
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
