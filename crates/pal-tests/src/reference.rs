//! Reference implementation wrappers
//!
//! Thin adapters over the `palette` crate so tests can compare oxpal
//! against an independent, widely used implementation of the same
//! color math.

use palette::color_difference::{Ciede2000, Wcag21RelativeContrast};
use palette::white_point::D65;
use palette::{FromColor, Hsl, Lab, Lch, Srgb};

/// Encoded 8-bit sRGB as a float `palette` color
fn srgb_f64(rgb: [u8; 3]) -> Srgb<f64> {
    Srgb::new(rgb[0], rgb[1], rgb[2]).into_format()
}

/// CIELAB (D65) via `palette`
pub fn reference_lab(rgb: [u8; 3]) -> [f64; 3] {
    let lab = Lab::<D65, f64>::from_color(srgb_f64(rgb));
    [lab.l, lab.a, lab.b]
}

/// LCh (D65) via `palette`: lightness, chroma, hue in degrees
pub fn reference_lch(rgb: [u8; 3]) -> [f64; 3] {
    let lch = Lch::<D65, f64>::from_color(srgb_f64(rgb));
    [lch.l, lch.chroma, lch.hue.into_positive_degrees()]
}

/// HSL via `palette`: hue in degrees, saturation and lightness 0-100
pub fn reference_hsl(rgb: [u8; 3]) -> [f64; 3] {
    let hsl = Hsl::<palette::encoding::Srgb, f64>::from_color(srgb_f64(rgb));
    [
        hsl.hue.into_positive_degrees(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0,
    ]
}

/// deltaE2000 between two Lab values via `palette`
pub fn reference_ciede2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let a = Lab::<D65, f64>::new(lab1[0], lab1[1], lab1[2]);
    let b = Lab::<D65, f64>::new(lab2[0], lab2[1], lab2[2]);
    a.difference(b)
}

/// WCAG 2.1 contrast ratio via `palette`
pub fn reference_contrast(fg: [u8; 3], bg: [u8; 3]) -> f64 {
    srgb_f64(fg).relative_contrast(srgb_f64(bg))
}
