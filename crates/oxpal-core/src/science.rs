//! Color Science Readouts
//!
//! Approximate physical readouts for a single color, plus the educational
//! mixing-theory records that accompany blends. The wavelength figure is a
//! hue-based estimate over the visible band, not a spectral measurement,
//! and the chromaticity is the CIE xy projection of the XYZ readout.

use serde::Serialize;

use crate::color::{ColorValue, Xyz};
use crate::mix::{MixModel, MixedColor};

/// CIE 1931 xy chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

/// Physical readouts for one color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScience {
    /// Approximate dominant wavelength in nanometres. Achromatic colors
    /// have no dominant hue and report none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wavelength: Option<f64>,
    /// Relative luminance, rounded to 4 decimals
    pub luminance: f64,
    /// xy chromaticity, each coordinate rounded to 4 decimals
    pub chromaticity: Chromaticity,
}

/// Compute the science readouts for a color
pub fn color_science(color: &ColorValue) -> ColorScience {
    let hsl = color.hsl_f();
    let wavelength = if hsl.s == 0.0 {
        None
    } else {
        Some(wavelength_from_hue(hsl.h))
    };

    let (x, y, _) = Xyz::from_rgb(&color.rgb_f()).to_xyy();
    ColorScience {
        wavelength,
        luminance: round4(color.rgb_f().relative_luminance()),
        chromaticity: Chromaticity {
            x: round4(x),
            y: round4(y),
        },
    }
}

/// Map a hue angle onto the visible band
///
/// Piecewise-linear over six 60-degree segments, anchored at
/// 700, 625, 530, 500, 475, 410 and 380 nm. The mapping runs backwards
/// through the spectrum because hue 0 is red (long wavelengths) and hue
/// climbs toward violet (short wavelengths).
fn wavelength_from_hue(hue: f64) -> f64 {
    let t = (hue % 60.0) / 60.0;
    match hue {
        h if h < 60.0 => 700.0 - t * 75.0,
        h if h < 120.0 => 625.0 - t * 95.0,
        h if h < 180.0 => 530.0 - t * 30.0,
        h if h < 240.0 => 500.0 - t * 25.0,
        h if h < 300.0 => 475.0 - t * 65.0,
        _ => 410.0 - t * 30.0,
    }
}

/// Describe the spectral band a wavelength falls in
pub fn wavelength_description(nm: f64) -> &'static str {
    match nm {
        nm if nm < 380.0 => "ultraviolet, outside the visible range",
        nm if nm < 450.0 => "violet, the shortest visible wavelengths",
        nm if nm < 495.0 => "blue, the color of sky and sea",
        nm if nm < 570.0 => "green, the most common color in nature",
        nm if nm < 590.0 => "yellow, the dominant band in sunlight",
        nm if nm < 620.0 => "orange, the color of sunsets and fire",
        nm if nm < 750.0 => "red, the longest visible wavelengths",
        _ => "infrared, outside the visible range",
    }
}

/// Psychology descriptors for a color
///
/// A base set from the hue band, adjusted by saturation and lightness
/// extremes, capped at six entries.
pub fn psychology_effects(color: &ColorValue) -> Vec<&'static str> {
    let hsl = color.hsl_f();
    let mut effects: Vec<&'static str> = Vec::with_capacity(8);

    match hsl.h {
        h if !(15.0..345.0).contains(&h) => {
            effects.extend(["passionate", "energetic", "exciting", "attention-grabbing"]);
        }
        h if h < 45.0 => effects.extend(["warm", "friendly", "creative", "lively"]),
        h if h < 75.0 => effects.extend(["bright", "optimistic", "alert", "intellectual"]),
        h if h < 150.0 => effects.extend(["natural", "restful", "growing", "balanced"]),
        h if h < 180.0 => effects.extend(["refreshing", "clean", "invigorating"]),
        h if h < 250.0 => effects.extend(["calm", "trustworthy", "stable", "focused"]),
        h if h < 290.0 => effects.extend(["mysterious", "noble", "creative", "imaginative"]),
        _ => effects.extend(["elegant", "romantic", "affectionate", "soft"]),
    }

    if hsl.s < 30.0 {
        effects.extend(["subdued", "refined"]);
    } else if hsl.s > 70.0 {
        effects.extend(["vivid", "striking"]);
    }

    if hsl.l < 30.0 {
        effects.extend(["weighty", "grounded"]);
    } else if hsl.l > 70.0 {
        effects.extend(["airy", "delicate"]);
    }

    effects.truncate(6);
    effects
}

/// A titled explanation of one mixing model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixingTheory {
    pub title: &'static str,
    pub description: &'static str,
    pub principles: [&'static str; 4],
    pub applications: [&'static str; 4],
}

/// The explanation record for an additive or subtractive blend
pub fn mixing_theory(model: MixModel) -> MixingTheory {
    match model {
        MixModel::Additive => MixingTheory {
            title: "Additive mixing",
            description: "Combining the primary colors of light (red, green, blue) \
                          produces new colors. This is how screens and displays work.",
            principles: [
                "Red + Green = Yellow",
                "Green + Blue = Cyan",
                "Blue + Red = Magenta",
                "Red + Green + Blue = White",
            ],
            applications: [
                "Television and monitor screens",
                "Smartphone displays",
                "LED lighting",
                "Stage lighting",
            ],
        },
        MixModel::Subtractive => MixingTheory {
            title: "Subtractive mixing",
            description: "Mixing pigments darkens the result, as with paints and \
                          inks. Surfaces absorb part of the light and reflect the rest.",
            principles: [
                "Cyan + Magenta = Blue-violet",
                "Magenta + Yellow = Red",
                "Yellow + Cyan = Green",
                "Cyan + Magenta + Yellow = Black",
            ],
            applications: [
                "Paints and watercolors",
                "CMYK printing",
                "Dyes and pigments",
                "Cosmetics",
            ],
        },
    }
}

/// A blend bundled with its theory and a per-mix explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixedColorReport {
    #[serde(flatten)]
    pub mixed: MixedColor,
    pub model: MixModel,
    pub theory: MixingTheory,
    pub explanation: String,
}

/// Explain a blend in terms of its parents
///
/// The model is classified from the parent count and the explanation
/// cites each parent's blend percentage.
pub fn explain_mix(mixed: &MixedColor, parents: &[ColorValue]) -> MixedColorReport {
    let model = MixModel::classify(parents.len());
    MixedColorReport {
        mixed: mixed.clone(),
        model,
        theory: mixing_theory(model),
        explanation: scientific_explanation(model, &mixed.ratio),
    }
}

fn scientific_explanation(model: MixModel, ratio: &[f64]) -> String {
    let percents = ratio
        .iter()
        .map(|r| ((r * 100.0).round() as i64).to_string())
        .collect::<Vec<_>>()
        .join(":");
    match model {
        MixModel::Additive => format!(
            "Overlapping light wavelengths stimulate the eye's cone cells in a \
             new combination, which is perceived as a new color. The blend \
             ratio is {percents}%."
        ),
        MixModel::Subtractive => format!(
            "Each pigment absorbs part of the spectrum, and the light still \
             reflected combines into the color that is seen. The blend ratio \
             is {percents}%."
        ),
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::{mix, mix_multiple};

    #[test]
    fn test_wavelength_anchors() {
        let red = color_science(&ColorValue::new(255, 0, 0));
        assert_eq!(red.wavelength, Some(700.0));

        let yellow = color_science(&ColorValue::new(255, 255, 0));
        assert_eq!(yellow.wavelength, Some(625.0));

        let green = color_science(&ColorValue::new(0, 255, 0));
        assert_eq!(green.wavelength, Some(530.0));

        let blue = color_science(&ColorValue::new(0, 0, 255));
        assert_eq!(blue.wavelength, Some(475.0));
    }

    #[test]
    fn test_achromatic_has_no_wavelength() {
        let gray = color_science(&ColorValue::new(128, 128, 128));
        assert_eq!(gray.wavelength, None);
        let black = color_science(&ColorValue::new(0, 0, 0));
        assert_eq!(black.wavelength, None);
    }

    #[test]
    fn test_white_readouts() {
        let white = color_science(&ColorValue::new(255, 255, 255));
        assert_eq!(white.luminance, 1.0);
        // White projects to the D65 white point
        assert_eq!(white.chromaticity.x, 0.3127);
        assert_eq!(white.chromaticity.y, 0.329);
    }

    #[test]
    fn test_black_chromaticity_is_origin() {
        let black = color_science(&ColorValue::new(0, 0, 0));
        assert_eq!(black.luminance, 0.0);
        assert_eq!(black.chromaticity, Chromaticity { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_wavelength_bands() {
        assert!(wavelength_description(700.0).starts_with("red"));
        assert!(wavelength_description(600.0).starts_with("orange"));
        assert!(wavelength_description(580.0).starts_with("yellow"));
        assert!(wavelength_description(520.0).starts_with("green"));
        assert!(wavelength_description(470.0).starts_with("blue"));
        assert!(wavelength_description(400.0).starts_with("violet"));
        assert!(wavelength_description(300.0).starts_with("ultraviolet"));
        assert!(wavelength_description(800.0).starts_with("infrared"));
    }

    #[test]
    fn test_psychology_red_band() {
        let effects = psychology_effects(&ColorValue::new(255, 0, 0));
        assert_eq!(effects.len(), 6);
        assert_eq!(effects[0], "passionate");
        // Full saturation adds the vivid pair before the cap
        assert!(effects.contains(&"vivid"));
    }

    #[test]
    fn test_psychology_capped_at_six() {
        // Saturated and light: 4 hue + 2 saturation + 2 lightness, capped
        let effects = psychology_effects(&ColorValue::new(255, 153, 153));
        assert_eq!(effects.len(), 6);
        assert!(!effects.contains(&"airy"));
    }

    #[test]
    fn test_psychology_lightness_band() {
        // Dark teal: 3 hue entries leave room for the weighty pair
        let effects = psychology_effects(&ColorValue::new(26, 77, 64));
        assert_eq!(
            effects,
            vec!["refreshing", "clean", "invigorating", "weighty", "grounded"]
        );
    }

    #[test]
    fn test_mixing_theory_records() {
        let additive = mixing_theory(MixModel::Additive);
        assert_eq!(additive.title, "Additive mixing");
        assert_eq!(additive.principles[3], "Red + Green + Blue = White");
        assert_eq!(additive.applications.len(), 4);

        let subtractive = mixing_theory(MixModel::Subtractive);
        assert_eq!(subtractive.principles[3], "Cyan + Magenta + Yellow = Black");
        assert_eq!(subtractive.applications[1], "CMYK printing");
    }

    #[test]
    fn test_explain_pair_mix() {
        let red = ColorValue::named(255, 0, 0);
        let blue = ColorValue::named(0, 0, 255);
        let mixed = mix(&red, &blue, 0.5);
        let report = explain_mix(&mixed, &[red, blue]);
        assert_eq!(report.model, MixModel::Additive);
        assert_eq!(report.theory.title, "Additive mixing");
        assert!(report.explanation.ends_with("The blend ratio is 50:50%."));
    }

    #[test]
    fn test_explain_large_mix_is_subtractive() {
        let parents = vec![
            ColorValue::new(255, 0, 0),
            ColorValue::new(0, 255, 0),
            ColorValue::new(0, 0, 255),
            ColorValue::new(255, 255, 0),
        ];
        let mixed = mix_multiple(&parents, None).unwrap();
        let report = explain_mix(&mixed, &parents);
        assert_eq!(report.model, MixModel::Subtractive);
        assert!(report.explanation.contains("25:25:25:25%"));
    }

    #[test]
    fn test_report_serializes_flat() {
        let red = ColorValue::new(255, 0, 0);
        let blue = ColorValue::new(0, 0, 255);
        let mixed = mix(&red, &blue, 0.5);
        let report = explain_mix(&mixed, &[red, blue]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hex"], "#800080");
        assert_eq!(json["model"], "additive");
        assert_eq!(json["theory"]["title"], "Additive mixing");
        assert!(json["explanation"].as_str().unwrap().contains("50:50%"));
    }
}
