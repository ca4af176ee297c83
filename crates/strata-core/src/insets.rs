// File: crates/strata-core/src/insets.rs
// Summary: Four-sided inset type with component-wise addition and interpolation.

use std::ops::Add;

/// Spacing reserved on the four sides of the drawing area.
/// Contract: all fields are non-negative in any resolved layout.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Same value on all four sides.
    pub const fn all(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Left/right only; vertical components are zero.
    pub const fn horizontal(left: f64, right: f64) -> Self {
        Self::new(0.0, right, 0.0, left)
    }

    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn is_non_negative(&self) -> bool {
        self.top >= 0.0 && self.right >= 0.0 && self.bottom >= 0.0 && self.left >= 0.0
    }

    /// Component-wise linear interpolation. `t` is not clamped; values outside
    /// [0, 1] extrapolate.
    pub fn lerp(a: Insets, b: Insets, t: f64) -> Insets {
        Insets::new(
            crate::lerp::lerp_f64(a.top, b.top, t),
            crate::lerp::lerp_f64(a.right, b.right, t),
            crate::lerp::lerp_f64(a.bottom, b.bottom, t),
            crate::lerp::lerp_f64(a.left, b.left, t),
        )
    }
}

impl Add for Insets {
    type Output = Insets;

    fn add(self, rhs: Insets) -> Insets {
        Insets::new(
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
            self.left + rhs.left,
        )
    }
}
