//! Color vision deficiency simulation
//!
//! A fixed hue-band heuristic: each anomalous-trichromacy type shifts and
//! desaturates only the hue range it affects, and monochromacy collapses
//! every color to its luminance gray. This is an approximation for palette
//! review, not a physiological cone-response model; the constants are part
//! of the contract so verdicts stay reproducible.

use serde::Serialize;

use crate::color::ColorValue;
use crate::distance::delta_e_2000;

/// CIEDE2000 distance below which two palette entries count as
/// indistinguishable under a simulated variant
const DISTINGUISHABLE: f64 = 3.0;

/// The four simulated deficiency types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CvdType {
    /// Reduced red sensitivity: hue 0-60 shifts +30, saturation x0.7
    Protanomaly,
    /// Reduced green sensitivity: hue 60-180 shifts -20, saturation x0.6
    Deuteranomaly,
    /// Reduced blue sensitivity: hue 180-300 shifts +60, saturation x0.8
    Tritanomaly,
    /// No color perception: luminance-equivalent gray
    Monochromacy,
}

impl CvdType {
    /// All types, in report order
    pub const ALL: [CvdType; 4] = [
        CvdType::Protanomaly,
        CvdType::Deuteranomaly,
        CvdType::Tritanomaly,
        CvdType::Monochromacy,
    ];

    /// Label used in simulated-color names and issue descriptions
    pub fn label(&self) -> &'static str {
        match self {
            CvdType::Protanomaly => "protanomaly",
            CvdType::Deuteranomaly => "deuteranomaly",
            CvdType::Tritanomaly => "tritanomaly",
            CvdType::Monochromacy => "monochromacy",
        }
    }

    /// Transform one color as this deficiency type would perceive it
    ///
    /// The result keeps the source color's id; the name gains a
    /// per-type suffix. Colors outside the affected hue band pass
    /// through unchanged apart from the name.
    pub fn simulate(&self, color: &ColorValue) -> ColorValue {
        let simulated = match self {
            CvdType::Protanomaly => self.shift_band(color, 0.0, 60.0, 30.0, 0.7),
            CvdType::Deuteranomaly => self.shift_band(color, 60.0, 180.0, -20.0, 0.6),
            CvdType::Tritanomaly => self.shift_band(color, 180.0, 300.0, 60.0, 0.8),
            CvdType::Monochromacy => {
                let gray = (color.rgb_f().relative_luminance() * 255.0).round() as u8;
                ColorValue::new(gray, gray, gray)
            }
        };

        let base_name = color.name.as_deref().unwrap_or("Color");
        simulated
            .with_name(format!("{} ({})", base_name, self.label()))
            .with_id(color.id.clone())
    }

    fn shift_band(
        &self,
        color: &ColorValue,
        band_start: f64,
        band_end: f64,
        hue_shift: f64,
        saturation_factor: f64,
    ) -> ColorValue {
        let hsl = color.hsl_f();
        if hsl.h < band_start || hsl.h > band_end {
            return color.clone();
        }
        let shifted = hsl.rotate(hue_shift).scale_saturation(saturation_factor);
        ColorValue::from_rgb_f(&shifted.to_rgb())
    }
}

/// A palette as seen under the four simulated deficiency types, plus a
/// distinguishability verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvdReport {
    pub original: Vec<ColorValue>,
    pub protanomaly: Vec<ColorValue>,
    pub deuteranomaly: Vec<ColorValue>,
    pub tritanomaly: Vec<ColorValue>,
    pub monochromacy: Vec<ColorValue>,
    /// True when every color pair stays distinguishable under every
    /// simulated variant
    pub accessible: bool,
    /// One entry per indistinguishable pair per variant
    pub issues: Vec<String>,
    /// Fixed remediation advice; non-empty only when issues exist
    pub recommendations: Vec<String>,
}

/// Simulate a palette under all four deficiency types
///
/// The verdict requires pairwise distinguishability (CIEDE2000 >= 3)
/// under every variant, not just the original palette.
pub fn simulate_cvd(colors: &[ColorValue]) -> CvdReport {
    let variants: Vec<Vec<ColorValue>> = CvdType::ALL
        .iter()
        .map(|ty| colors.iter().map(|c| ty.simulate(c)).collect())
        .collect();

    let mut issues = Vec::new();
    for (ty, variant) in CvdType::ALL.iter().zip(&variants) {
        for i in 0..variant.len() {
            for j in (i + 1)..variant.len() {
                let de = delta_e_2000(&variant[i].hex, &variant[j].hex);
                if de.value < DISTINGUISHABLE {
                    issues.push(format!(
                        "{}: colors {} and {} are hard to tell apart (delta E {:.2})",
                        ty.label(),
                        i + 1,
                        j + 1,
                        de.value
                    ));
                }
            }
        }
    }

    let recommendations = if issues.is_empty() {
        Vec::new()
    } else {
        vec![
            "Increase the lightness separation between palette colors".to_string(),
            "Do not rely on hue alone; pair colors with patterns or textures".to_string(),
            "Add non-color cues such as shape, size, or labels".to_string(),
        ]
    };

    let mut variants = variants.into_iter();
    CvdReport {
        original: colors.to_vec(),
        protanomaly: variants.next().unwrap_or_default(),
        deuteranomaly: variants.next().unwrap_or_default(),
        tritanomaly: variants.next().unwrap_or_default(),
        monochromacy: variants.next().unwrap_or_default(),
        accessible: issues.is_empty(),
        issues,
        recommendations,
    }
}
