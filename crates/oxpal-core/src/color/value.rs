//! Color Records
//!
//! [`ColorValue`] is the record handed across the engine boundary: one
//! color carried redundantly as integer RGB, rounded integer HSL, and the
//! canonical hex string, plus an advisory name and a provenance id.
//!
//! The record is immutable once constructed. The hex form is always
//! recomputed from the RGB channels, never stored independently, and the
//! id is derived from the hex form so identical colors constructed
//! independently compare equal end to end.

use std::fmt;

use serde::Serialize;

use crate::color::hex::rgb_to_hex;
use crate::color::name::basic_name;
use crate::color::{Hsl, Lab, Lch, Rgb};

/// Integer RGB channels as serialized across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RgbValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Rounded integer HSL as serialized across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HslValue {
    /// Hue in [0, 360) degrees
    pub h: u16,
    /// Saturation percent
    pub s: u8,
    /// Lightness percent
    pub l: u8,
}

impl HslValue {
    /// Round a full-precision HSL to display integers. A hue that rounds
    /// up to 360 wraps back to 0.
    pub fn from_hsl(hsl: &Hsl) -> Self {
        let mut h = hsl.h.round() as u16;
        if h >= 360 {
            h = 0;
        }
        Self {
            h,
            s: hsl.s.round() as u8,
            l: hsl.l.round() as u8,
        }
    }
}

/// Opaque provenance identifier
///
/// Content-derived: the same color always generates the same id, keeping
/// construction pure and extraction deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorId(String);

impl ColorId {
    /// Derive the id for a color from its channels
    pub fn derive(r: u8, g: u8, b: u8) -> Self {
        Self(format!("c{r:02x}{g:02x}{b:02x}"))
    }

    /// Wrap an externally chosen id
    pub fn custom(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ColorId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single color expressed in the three boundary coordinate systems
#[derive(Debug, Clone, Serialize)]
pub struct ColorValue {
    pub hex: String,
    pub rgb: RgbValue,
    pub hsl: HslValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub id: ColorId,
}

impl ColorValue {
    /// Construct from 8-bit channels with no name
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let hsl = Hsl::from_rgb(&Rgb::from_u8(r, g, b));
        Self {
            hex: rgb_to_hex(r, g, b),
            rgb: RgbValue { r, g, b },
            hsl: HslValue::from_hsl(&hsl),
            name: None,
            id: ColorId::derive(r, g, b),
        }
    }

    /// Construct with the basic lookup name attached
    pub fn named(r: u8, g: u8, b: u8) -> Self {
        let mut value = Self::new(r, g, b);
        value.name = Some(basic_name(r, g, b).to_string());
        value
    }

    /// Construct from the floating-point working type
    pub fn from_rgb_f(rgb: &Rgb) -> Self {
        let [r, g, b] = rgb.to_u8();
        Self::new(r, g, b)
    }

    /// Replace the advisory name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the generated id with an explicit one
    pub fn with_id(mut self, id: ColorId) -> Self {
        self.id = id;
        self
    }

    /// The floating-point RGB working form
    #[inline]
    pub fn rgb_f(&self) -> Rgb {
        Rgb::from_u8(self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// Full-precision HSL (the stored `hsl` field is rounded for display)
    #[inline]
    pub fn hsl_f(&self) -> Hsl {
        Hsl::from_rgb(&self.rgb_f())
    }

    /// Full-precision Lab
    #[inline]
    pub fn lab(&self) -> Lab {
        Lab::from_rgb(&self.rgb_f())
    }

    /// Full-precision LCh
    #[inline]
    pub fn lch(&self) -> Lch {
        Lch::from_rgb(&self.rgb_f())
    }
}

/// Equality is channel equality; names and ids are advisory
impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for ColorValue {}

impl std::hash::Hash for ColorValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}
