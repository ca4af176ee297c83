// File: crates/strata-core/src/color.rs
// Summary: RGBA color value type with channel-wise interpolation.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a 32-bit RGBA value (0xRRGGBBAA format).
    pub const fn from_packed(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Pack into a 32-bit RGBA value (0xRRGGBBAA format).
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
    }

    /// Channel-wise linear interpolation. Channels are clamped to the
    /// representable range so extrapolated `t` values cannot wrap.
    pub fn lerp(a: Color, b: Color, t: f64) -> Color {
        let ch = |x: u8, y: u8| -> u8 {
            crate::lerp::lerp_f64(x as f64, y as f64, t).round().clamp(0.0, 255.0) as u8
        };
        Color::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_roundtrip() {
        let color = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(Color::from_packed(color.to_packed()), color);
        assert_eq!(Color::new(0xAA, 0xBB, 0xCC, 0xDD).to_packed(), 0xAABBCCDD);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::rgb(0, 100, 200);
        let b = Color::rgb(100, 200, 0);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);
        assert_eq!(Color::lerp(a, b, 0.5), Color::rgb(50, 150, 100));
    }

    #[test]
    fn lerp_clamps_extrapolation() {
        let a = Color::rgb(10, 10, 10);
        let b = Color::rgb(250, 250, 250);
        let past = Color::lerp(a, b, 2.0);
        assert_eq!(past, Color::rgb(255, 255, 255));
    }
}
