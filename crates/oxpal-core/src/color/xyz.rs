//! CIE XYZ Color Space
//!
//! XYZ is the connection space between sRGB and Lab. All conversions here
//! are fixed to the D65/2° standard observer.

use crate::color::Rgb;

/// D65 reference white (2° observer)
pub const D65: Xyz = Xyz::new(0.95047, 1.0, 1.08883);

/// Linear sRGB to XYZ matrix rows (D65)
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to linear sRGB matrix rows (D65)
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// CIE 1931 XYZ color coordinates
///
/// Device-independent tristimulus values. Y represents luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert from encoded sRGB
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let lin = rgb.to_linear();
        let m = &SRGB_TO_XYZ;
        Self {
            x: m[0][0] * lin.r + m[0][1] * lin.g + m[0][2] * lin.b,
            y: m[1][0] * lin.r + m[1][1] * lin.g + m[1][2] * lin.b,
            z: m[2][0] * lin.r + m[2][1] * lin.g + m[2][2] * lin.b,
        }
    }

    /// Convert to encoded sRGB, clamped into gamut
    pub fn to_rgb(&self) -> Rgb {
        let m = &XYZ_TO_SRGB;
        let lin = Rgb::new(
            m[0][0] * self.x + m[0][1] * self.y + m[0][2] * self.z,
            m[1][0] * self.x + m[1][1] * self.y + m[1][2] * self.z,
            m[2][0] * self.x + m[2][1] * self.y + m[2][2] * self.z,
        );
        lin.clamp().to_encoded().clamp()
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Convert to xyY chromaticity coordinates
    ///
    /// Returns (x, y, Y) where x and y are chromaticity and Y is luminance.
    #[inline]
    pub fn to_xyy(&self) -> (f64, f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum, self.y)
        } else {
            (0.0, 0.0, 0.0)
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}
