//! Hex-facing perceptual distance with formula tagging
//!
//! The distance formulas themselves live in [`crate::color::lab`]; this
//! module is the string-input surface. Every result carries the formula
//! that actually ran: strictly parsed `#RRGGBB` inputs get the requested
//! formula, inputs that only parse leniently (shorthand, missing `#`,
//! stray whitespace) drop to a Euclidean CIE76 distance, and unparseable
//! inputs produce the maximum sentinel distance.

use serde::Serialize;

use crate::color::{Lab, Rgb, lab, parse_hex, parse_hex_lenient};

/// Distance reported when either input cannot be parsed at all
pub const MAX_DISTANCE: f64 = 100.0;

/// The formula behind a [`DeltaE`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaEMethod {
    /// CIEDE2000, the perceptually weighted standard
    Ciede2000,
    /// CIE94 with graphic-arts constants
    Cie94,
    /// Euclidean Lab distance; also the lenient-input fallback
    Cie76,
}

/// A perceptual distance tagged with the formula that produced it
///
/// The tag lets callers (and tests) tell a precise result from the
/// CIE76 fallback without re-validating their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeltaE {
    /// The distance; 0 means identical
    pub value: f64,
    /// Which formula produced `value`
    pub method: DeltaEMethod,
}

impl DeltaE {
    /// Below ~1.0 most observers cannot tell the colors apart
    #[inline]
    pub fn is_imperceptible(&self) -> bool {
        self.value < 1.0
    }

    /// Below ~3.0 the colors read as the same color at a glance
    #[inline]
    pub fn is_close(&self) -> bool {
        self.value < 3.0
    }
}

/// CIEDE2000 distance between two hex colors
///
/// Tagged `Ciede2000` for strict inputs, `Cie76` when either input
/// needed lenient parsing, and `Cie76` with [`MAX_DISTANCE`] when
/// either input is unparseable.
pub fn delta_e_2000(hex_a: &str, hex_b: &str) -> DeltaE {
    tagged_distance(hex_a, hex_b, DeltaEMethod::Ciede2000)
}

/// CIE94 distance between two hex colors (kL=1, K1=0.045, K2=0.015)
///
/// Same fallback policy as [`delta_e_2000`].
pub fn delta_e_94(hex_a: &str, hex_b: &str) -> DeltaE {
    tagged_distance(hex_a, hex_b, DeltaEMethod::Cie94)
}

/// Euclidean CIE76 distance between two hex colors
pub fn delta_e_76(hex_a: &str, hex_b: &str) -> DeltaE {
    tagged_distance(hex_a, hex_b, DeltaEMethod::Cie76)
}

enum ParsedLab {
    Strict(Lab),
    Lenient(Lab),
    Failed,
}

impl ParsedLab {
    fn lab(&self) -> Lab {
        match self {
            ParsedLab::Strict(lab) | ParsedLab::Lenient(lab) => *lab,
            ParsedLab::Failed => Lab::default(),
        }
    }
}

fn parse_for_distance(hex: &str) -> ParsedLab {
    if let Ok([r, g, b]) = parse_hex(hex) {
        ParsedLab::Strict(Lab::from_rgb(&Rgb::from_u8(r, g, b)))
    } else if let Some([r, g, b]) = parse_hex_lenient(hex) {
        ParsedLab::Lenient(Lab::from_rgb(&Rgb::from_u8(r, g, b)))
    } else {
        ParsedLab::Failed
    }
}

fn tagged_distance(hex_a: &str, hex_b: &str, requested: DeltaEMethod) -> DeltaE {
    let a = parse_for_distance(hex_a);
    let b = parse_for_distance(hex_b);

    if matches!(a, ParsedLab::Failed) || matches!(b, ParsedLab::Failed) {
        return DeltaE {
            value: MAX_DISTANCE,
            method: DeltaEMethod::Cie76,
        };
    }

    if matches!(a, ParsedLab::Lenient(_)) || matches!(b, ParsedLab::Lenient(_)) {
        return DeltaE {
            value: lab::delta_e_76(a.lab(), b.lab()),
            method: DeltaEMethod::Cie76,
        };
    }

    let value = match requested {
        DeltaEMethod::Ciede2000 => lab::delta_e_2000(a.lab(), b.lab()),
        DeltaEMethod::Cie94 => lab::delta_e_94(a.lab(), b.lab()),
        DeltaEMethod::Cie76 => lab::delta_e_76(a.lab(), b.lab()),
    };

    DeltaE {
        value,
        method: requested,
    }
}
