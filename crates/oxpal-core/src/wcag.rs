//! WCAG 2.1 contrast evaluation
//!
//! Contrast ratios, AA/AAA threshold grading, and the suggestion search
//! that nudges a failing foreground lighter and darker until it clears
//! the AA-normal bar against a fixed background.
//!
//! All entry points take hex strings; callers validate user-entered hex
//! upstream (the unchecked decode treats garbage digits as zero).

use serde::Serialize;

use crate::color::{ColorValue, Lab, Rgb, hex_to_rgb, rgb_to_hex};

const AA_NORMAL: f64 = 4.5;
const AA_LARGE: f64 = 3.0;
const AAA_NORMAL: f64 = 7.0;
const AAA_LARGE: f64 = 4.5;

/// Lightness step per search iteration, in lighten/darken amount units
const SUGGESTION_STEP: f64 = 0.5;

/// Iteration cap for the suggestion search
///
/// 24 half-steps cover the full 0..100 L* range twice over; a foreground
/// that has not reached the target by then never will (the clamp check
/// usually fires first).
const SUGGESTION_MAX_STEPS: u32 = 24;

/// WCAG contrast ratio between two hex colors, always in [1, 21]
///
/// `(L1 + 0.05) / (L2 + 0.05)` with L1 the lighter relative luminance.
/// Symmetric in its arguments.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    let la = luminance(hex_a);
    let lb = luminance(hex_b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a color reads as light (relative luminance above 0.5)
pub fn is_light(hex: &str) -> bool {
    luminance(hex) > 0.5
}

/// Raise lightness by `amount` steps (1.0 step = 18 L* units)
///
/// Monotonic: the result is never darker than the input, and lightness
/// clamps at pure white rather than overshooting.
pub fn lighten(hex: &str, amount: f64) -> String {
    shift_lightness(hex, amount)
}

/// Lower lightness by `amount` steps, clamping at pure black
pub fn darken(hex: &str, amount: f64) -> String {
    shift_lightness(hex, -amount)
}

fn shift_lightness(hex: &str, amount: f64) -> String {
    let [r, g, b] = hex_to_rgb(hex);
    let lab = Lab::from_rgb(&Rgb::from_u8(r, g, b)).lighten(amount);
    let [r, g, b] = lab.to_rgb().to_u8();
    rgb_to_hex(r, g, b)
}

fn luminance(hex: &str) -> f64 {
    let [r, g, b] = hex_to_rgb(hex);
    Rgb::from_u8(r, g, b).relative_luminance()
}

/// Pass/fail against one conformance level's normal- and large-text bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelGrade {
    /// Normal-size text passes
    pub normal: bool,
    /// Large text (18pt / 14pt bold) passes
    pub large: bool,
}

/// Foreground alternatives produced by the suggestion search
///
/// Each is the best variant found in its direction; when the target is
/// unreachable against the given background the closest achievable color
/// is still reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WcagSuggestions {
    /// Brightened foreground
    pub light: String,
    /// Darkened foreground
    pub dark: String,
}

/// Contrast evaluation for one foreground/background pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WcagReport {
    pub foreground: String,
    pub background: String,
    /// Ratio rounded to 2 decimals
    pub contrast_ratio: f64,
    pub aa: LevelGrade,
    pub aaa: LevelGrade,
    /// Present only when AA-normal fails
    pub suggestions: Option<WcagSuggestions>,
}

impl WcagReport {
    /// The strictest level this pair passes for normal text
    pub fn level(&self) -> &'static str {
        if self.aaa.normal {
            "AAA"
        } else if self.aa.normal {
            "AA"
        } else {
            "FAIL"
        }
    }
}

/// Evaluate one foreground/background pair against WCAG 2.1
///
/// Suggestions are generated only when the pair fails AA-normal.
pub fn check_wcag(foreground: &str, background: &str) -> WcagReport {
    let ratio = contrast_ratio(foreground, background);
    let rounded = (ratio * 100.0).round() / 100.0;

    let aa = LevelGrade {
        normal: rounded >= AA_NORMAL,
        large: rounded >= AA_LARGE,
    };
    let aaa = LevelGrade {
        normal: rounded >= AAA_NORMAL,
        large: rounded >= AAA_LARGE,
    };

    let suggestions = if aa.normal {
        None
    } else {
        Some(WcagSuggestions {
            light: search_suggestion(foreground, background, ratio, true),
            dark: search_suggestion(foreground, background, ratio, false),
        })
    };

    WcagReport {
        foreground: foreground.to_string(),
        background: background.to_string(),
        contrast_ratio: rounded,
        aa,
        aaa,
        suggestions,
    }
}

/// Pairwise contrast matrix over a palette, one report per pair (i < j)
pub fn evaluate_palette_wcag(colors: &[ColorValue]) -> Vec<WcagReport> {
    let mut reports = Vec::new();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            reports.push(check_wcag(&colors[i].hex, &colors[j].hex));
        }
    }
    reports
}

/// Walk the foreground lighter or darker in half-steps until the ratio
/// reaches AA-normal, the color clamps, or the step cap is hit
fn search_suggestion(foreground: &str, background: &str, ratio: f64, toward_light: bool) -> String {
    let mut current = foreground.to_string();
    let mut current_ratio = ratio;

    for _ in 0..SUGGESTION_MAX_STEPS {
        if current_ratio >= AA_NORMAL {
            break;
        }
        let next = if toward_light {
            lighten(&current, SUGGESTION_STEP)
        } else {
            darken(&current, SUGGESTION_STEP)
        };
        // Clamped at pure white/black: no further movement possible
        if next == current {
            break;
        }
        current_ratio = contrast_ratio(&next, background);
        current = next;
    }

    current
}
