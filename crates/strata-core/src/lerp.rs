// File: crates/strata-core/src/lerp.rs
// Summary: Scalar interpolation helpers shared by options, data and decorations.

/// Linear interpolation between two scalars. `t` is not clamped; values
/// outside [0, 1] extrapolate and callers clamp if that is undesired.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate optional scalars. Both present lerps the values; a mismatch
/// falls back to the midpoint threshold choice.
pub fn lerp_option_f64(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(lerp_f64(x, y, t)),
        _ => threshold(&a, &b, t),
    }
}

/// Midpoint switch for values with no continuous blend: the source value
/// while `t < 0.5`, the target value from the midpoint on.
#[inline]
pub fn threshold<V: Clone>(a: &V, b: &V, t: f64) -> V {
    if t < 0.5 {
        a.clone()
    } else {
        b.clone()
    }
}
