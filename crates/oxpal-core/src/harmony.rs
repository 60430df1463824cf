//! Color harmony and hue-wheel readouts
//!
//! Harmony companions are derived by rotating hue while holding
//! saturation and lightness constant. Hue arithmetic wraps with a
//! Euclidean remainder so negative intermediate angles land in [0, 360).

use std::fmt;

use serde::Serialize;

use crate::color::{ColorValue, Hsl, rgb_to_hex};

/// A hue-rotation harmony scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HarmonyScheme {
    /// 180 degrees apart (maximum contrast)
    Complementary,
    /// 30 degrees to either side (adjacent on the wheel)
    Analogous,
    /// 120 degrees apart (balanced triangle)
    Triadic,
    /// 90-degree steps (double complementary)
    Tetradic,
    /// 150 and 210 degrees (softer contrast than complementary)
    SplitComplementary,
}

impl HarmonyScheme {
    /// All schemes, in presentation order
    pub const ALL: [HarmonyScheme; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::SplitComplementary,
    ];

    /// Hue offsets from the base color, in degrees
    pub fn offsets(&self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
            Self::SplitComplementary => &[150.0, 210.0],
        }
    }

    /// The scheme's companion colors for a base color, as hex strings
    pub fn companions(&self, color: &ColorValue) -> Vec<String> {
        let hsl = color.hsl_f();
        self.offsets()
            .iter()
            .map(|offset| rotated_hex(&hsl, *offset))
            .collect()
    }

    /// Number of colors in the full scheme, base included
    pub fn point_count(&self) -> usize {
        1 + self.offsets().len()
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complementary => write!(f, "Complementary"),
            Self::Analogous => write!(f, "Analogous"),
            Self::Triadic => write!(f, "Triadic"),
            Self::Tetradic => write!(f, "Tetradic"),
            Self::SplitComplementary => write!(f, "Split-Complementary"),
        }
    }
}

/// Position of a color on the hue wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WheelPosition {
    /// Hue angle rounded to integer degrees, [0, 360)
    pub angle: u16,
    /// Saturation percent, rounded
    pub radius: u8,
}

/// Read a color's wheel position (hue angle, saturation radius)
pub fn wheel_position(color: &ColorValue) -> WheelPosition {
    let hsl = color.hsl_f();
    WheelPosition {
        angle: (hsl.h.round() as u16) % 360,
        radius: hsl.s.round() as u8,
    }
}

/// Every harmony companion for one base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonySet {
    pub complementary: String,
    pub analogous: [String; 2],
    pub triadic: [String; 2],
    pub tetradic: [String; 3],
    pub split_complementary: [String; 2],
}

/// Compute the full harmony set for a base color
pub fn harmony_set(color: &ColorValue) -> HarmonySet {
    let hsl = color.hsl_f();
    HarmonySet {
        complementary: rotated_hex(&hsl, 180.0),
        analogous: [rotated_hex(&hsl, -30.0), rotated_hex(&hsl, 30.0)],
        triadic: [rotated_hex(&hsl, 120.0), rotated_hex(&hsl, 240.0)],
        tetradic: [
            rotated_hex(&hsl, 90.0),
            rotated_hex(&hsl, 180.0),
            rotated_hex(&hsl, 270.0),
        ],
        split_complementary: [rotated_hex(&hsl, 150.0), rotated_hex(&hsl, 210.0)],
    }
}

/// A centered run of analogous colors in 30-degree steps
///
/// The base color sits in the middle of the run (at index `count / 2`)
/// and is included in the output.
pub fn analogous_run(color: &ColorValue, count: usize) -> Vec<String> {
    let hsl = color.hsl_f();
    let center = (count / 2) as i64;
    (0..count as i64)
        .map(|i| rotated_hex(&hsl, ((i - center) * 30) as f64))
        .collect()
}

/// Name the 30-degree hue band an angle falls in
///
/// Twelve fixed bands, with the red band straddling zero (345 through 15).
/// The input angle is normalized into [0, 360) first.
pub fn color_name_from_angle(angle: f64) -> &'static str {
    let a = angle.rem_euclid(360.0);
    match a {
        a if a < 15.0 || a >= 345.0 => "Red",
        a if a < 45.0 => "Red-Orange",
        a if a < 75.0 => "Orange",
        a if a < 105.0 => "Yellow-Orange",
        a if a < 135.0 => "Yellow",
        a if a < 165.0 => "Yellow-Green",
        a if a < 195.0 => "Green",
        a if a < 225.0 => "Blue-Green",
        a if a < 255.0 => "Blue",
        a if a < 285.0 => "Blue-Violet",
        a if a < 315.0 => "Violet",
        _ => "Red-Violet",
    }
}

fn rotated_hex(hsl: &Hsl, degrees: f64) -> String {
    let [r, g, b] = hsl.rotate(degrees).to_rgb().to_u8();
    rgb_to_hex(r, g, b)
}
