//! Color type for 3-channel canvases.
//!
//! Canvases carry no alpha channel; translucency only appears transiently as
//! anti-aliasing coverage, which is applied by interpolating toward the draw
//! color with [`Rgb::lerp`].

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
#[cfg_attr(feature = "scene", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "scene", serde(from = "[u8; 3]", into = "[u8; 3]"))]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black, the initial color of every canvas.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Whether every channel is zero.
    #[must_use]
    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Mean of the three channels.
    #[must_use]
    pub fn intensity(self) -> f32 {
        (f32::from(self.r) + f32::from(self.g) + f32::from(self.b)) / 3.0
    }

    /// Linear interpolation between two colors, rounded to nearest.
    ///
    /// `t` is clamped to `[0, 1]`; `t == 1` yields `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };

        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_constants() {
        assert_eq!(Rgb::BLACK, Rgb::default());
        assert_eq!(Rgb::WHITE.to_array(), [255, 255, 255]);
        assert_eq!(Rgb::RED.r, 255);
        assert_eq!(Rgb::GREEN.g, 255);
        assert_eq!(Rgb::BLUE.b, 255);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
        // 127.5 rounds away from zero
        assert_eq!(mid, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_lerp_boundaries() {
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, -0.5), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.lerp(Rgb::WHITE, 1.5), Rgb::WHITE);
    }

    #[test]
    fn test_lerp_descending_channel() {
        let c = Rgb::new(200, 0, 100).lerp(Rgb::new(0, 200, 100), 0.25);
        assert_eq!(c, Rgb::new(150, 50, 100));
    }

    #[test]
    fn test_array_conversions() {
        let color: Rgb = [10, 20, 30].into();
        assert_eq!(color, Rgb::new(10, 20, 30));
        let arr: [u8; 3] = color.into();
        assert_eq!(arr, [10, 20, 30]);
    }

    #[test]
    fn test_is_black_and_intensity() {
        assert!(Rgb::BLACK.is_black());
        assert!(!Rgb::new(0, 0, 1).is_black());
        assert!((Rgb::new(30, 60, 90).intensity() - 60.0).abs() < f32::EPSILON);
    }
}
