//! HSL Color Representation
//!
//! Cylindrical hue/saturation/lightness form used by the harmony engine,
//! the wheel readout, and the vision-deficiency transforms.

use crate::color::Rgb;

/// HSL color: hue in degrees [0, 360), saturation and lightness as
/// percentages [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation percent
    pub s: f64,
    /// Lightness percent
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert from RGB. Achromatic input (r == g == b) yields hue 0.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == rgb.r {
            (rgb.g - rgb.b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
        } else if max == rgb.g {
            (rgb.b - rgb.r) / d + 2.0
        } else {
            (rgb.r - rgb.g) / d + 4.0
        };

        Self::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Convert to RGB
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(r + m, g + m, b + m)
    }

    /// Rotate the hue by an offset in degrees, wrapping into [0, 360)
    #[inline]
    pub fn rotate(&self, degrees: f64) -> Self {
        Self::new((self.h + degrees).rem_euclid(360.0), self.s, self.l)
    }

    /// Scale saturation by a factor, clamped to [0, 100]
    #[inline]
    pub fn scale_saturation(&self, factor: f64) -> Self {
        Self::new(self.h, (self.s * factor).clamp(0.0, 100.0), self.l)
    }

    /// Replace the hue, keeping saturation and lightness
    #[inline]
    pub fn with_hue(&self, h: f64) -> Self {
        Self::new(h.rem_euclid(360.0), self.s, self.l)
    }

    /// Check if approximately equal to another HSL color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}
