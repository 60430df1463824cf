//! CIELCh Color Space
//!
//! Polar form of Lab: the same lightness with chroma and hue in place of
//! the rectangular a/b axes.

use crate::color::{Lab, Rgb};

/// CIELCh color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Chroma (0, unbounded positive)
    pub c: f64,
    /// Hue angle in degrees [0, 360)
    pub h: f64,
}

impl Lch {
    /// Create a new LCh color
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert from Lab
    #[inline]
    pub fn from_lab(lab: &Lab) -> Self {
        Self {
            l: lab.l,
            c: lab.chroma(),
            h: lab.hue_degrees(),
        }
    }

    /// Convert to Lab
    #[inline]
    pub fn to_lab(&self) -> Lab {
        let rad = self.h.to_radians();
        Lab::new(self.l, self.c * rad.cos(), self.c * rad.sin())
    }

    /// Convert from encoded sRGB
    #[inline]
    pub fn from_rgb(rgb: &Rgb) -> Self {
        Self::from_lab(&Lab::from_rgb(rgb))
    }

    /// Convert to encoded sRGB, clamped into gamut
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        self.to_lab().to_rgb()
    }

    /// Check if approximately equal to another LCh color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}
