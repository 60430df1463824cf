//! Descriptive color naming
//!
//! Two tiers: [`basic_name`] matches a small table of well-known colors
//! exactly and falls back to coarse HSL bands, while [`perceptual_name`]
//! classifies by Lab lightness first and then by twelve 30-degree hue
//! bands. Both return static strings suitable for display labels.

use crate::color::{Hsl, Lab, Rgb};

/// Well-known colors matched exactly before any band logic runs
const NAMED_COLORS: &[([u8; 3], &str)] = &[
    ([255, 0, 0], "Red"),
    ([0, 255, 0], "Green"),
    ([0, 0, 255], "Blue"),
    ([255, 255, 0], "Yellow"),
    ([255, 0, 255], "Magenta"),
    ([0, 255, 255], "Cyan"),
    ([0, 0, 0], "Black"),
    ([255, 255, 255], "White"),
    ([128, 128, 128], "Gray"),
    ([255, 165, 0], "Orange"),
    ([128, 0, 128], "Purple"),
    ([255, 192, 203], "Pink"),
    ([165, 42, 42], "Brown"),
    ([0, 128, 0], "Dark Green"),
    ([0, 0, 128], "Navy"),
];

/// Name a color from the lookup table, falling back to HSL bands
///
/// Near-achromatic colors get a gray ladder by lightness, extreme
/// lightness short-circuits to "Dark"/"Light", and everything else is
/// named by hue band.
pub fn basic_name(r: u8, g: u8, b: u8) -> &'static str {
    if let Some((_, name)) = NAMED_COLORS.iter().find(|(rgb, _)| *rgb == [r, g, b]) {
        return name;
    }

    let hsl = Hsl::from_rgb(&Rgb::from_u8(r, g, b));
    let (h, s, l) = (hsl.h, hsl.s, hsl.l);

    if s < 10.0 {
        if l < 20.0 {
            return "Dark Gray";
        }
        if l < 50.0 {
            return "Gray";
        }
        if l < 80.0 {
            return "Light Gray";
        }
        return "White";
    }

    if l < 15.0 {
        return "Dark";
    }
    if l > 85.0 {
        return "Light";
    }

    if h < 15.0 || h > 345.0 {
        return "Red";
    }
    if h < 45.0 {
        return "Orange";
    }
    if h < 75.0 {
        return "Yellow";
    }
    if h < 150.0 {
        return "Green";
    }
    if h < 180.0 {
        return "Cyan";
    }
    if h < 250.0 {
        return "Blue";
    }
    if h < 290.0 {
        return "Purple";
    }
    if h < 345.0 {
        return "Pink";
    }

    // Only hue 345.0 exactly reaches this point
    "Custom"
}

/// Name a color by perceptual tone
///
/// Lab lightness decides first: L below 20 is a dark tone and above 80 a
/// light tone regardless of hue. Remaining colors with no usable
/// saturation are gray tones; the rest fall into twelve hue bands.
pub fn perceptual_name(r: u8, g: u8, b: u8) -> &'static str {
    let rgb = Rgb::from_u8(r, g, b);
    let lab = Lab::from_rgb(&rgb);

    if lab.l < 20.0 {
        return "Dark Tone";
    }
    if lab.l > 80.0 {
        return "Light Tone";
    }

    let hsl = Hsl::from_rgb(&rgb);
    if hsl.s < 10.0 {
        return "Gray Tone";
    }

    match hsl.h {
        h if h < 15.0 => "Red",
        h if h < 45.0 => "Orange",
        h if h < 75.0 => "Yellow",
        h if h < 105.0 => "Yellow-Green",
        h if h < 135.0 => "Green",
        h if h < 165.0 => "Blue-Green",
        h if h < 195.0 => "Cyan",
        h if h < 225.0 => "Sky Blue",
        h if h < 255.0 => "Blue",
        h if h < 285.0 => "Violet",
        h if h < 315.0 => "Purple",
        h if h < 345.0 => "Magenta",
        _ => "Red",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table_hits() {
        assert_eq!(basic_name(255, 0, 0), "Red");
        assert_eq!(basic_name(0, 0, 128), "Navy");
        assert_eq!(basic_name(0, 128, 0), "Dark Green");
        assert_eq!(basic_name(165, 42, 42), "Brown");
    }

    #[test]
    fn test_gray_ladder() {
        assert_eq!(basic_name(30, 30, 30), "Dark Gray");
        assert_eq!(basic_name(100, 100, 100), "Gray");
        assert_eq!(basic_name(180, 180, 180), "Light Gray");
        assert_eq!(basic_name(250, 250, 250), "White");
    }

    #[test]
    fn test_lightness_short_circuit() {
        // Saturated but nearly black
        assert_eq!(basic_name(40, 0, 0), "Dark");
        // Saturated but nearly white
        assert_eq!(basic_name(255, 230, 230), "Light");
    }

    #[test]
    fn test_hue_bands() {
        assert_eq!(basic_name(255, 10, 10), "Red");
        assert_eq!(basic_name(255, 128, 0), "Orange");
        assert_eq!(basic_name(200, 200, 0), "Yellow");
        assert_eq!(basic_name(0, 200, 50), "Green");
        assert_eq!(basic_name(0, 210, 200), "Cyan");
        assert_eq!(basic_name(30, 60, 220), "Blue");
        assert_eq!(basic_name(150, 50, 220), "Purple");
        assert_eq!(basic_name(230, 50, 160), "Pink");
    }

    #[test]
    fn test_hue_345_is_custom() {
        // rgb(240, 0, 60) has hue exactly 345, outside both the red band
        // (h > 345) and the pink band (h < 345)
        let hsl = Hsl::from_rgb(&Rgb::from_u8(240, 0, 60));
        assert!((hsl.h - 345.0).abs() < 1e-9);
        assert_eq!(basic_name(240, 0, 60), "Custom");
    }

    #[test]
    fn test_perceptual_tones() {
        assert_eq!(perceptual_name(0, 0, 0), "Dark Tone");
        assert_eq!(perceptual_name(255, 255, 255), "Light Tone");
        assert_eq!(perceptual_name(128, 128, 128), "Gray Tone");
    }

    #[test]
    fn test_perceptual_hue_bands() {
        assert_eq!(perceptual_name(255, 0, 0), "Red");
        assert_eq!(perceptual_name(0, 170, 255), "Sky Blue");
        assert_eq!(perceptual_name(128, 0, 255), "Violet");
        assert_eq!(perceptual_name(230, 0, 130), "Magenta");
    }

    #[test]
    fn test_lightness_beats_saturation() {
        // Saturated yellow is very light in Lab terms
        assert_eq!(perceptual_name(255, 255, 0), "Light Tone");
    }
}
