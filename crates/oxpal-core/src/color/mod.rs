//! Color space types and conversions
//!
//! This module provides:
//! - RGB primitives and the sRGB transfer function
//! - HSL cylindrical coordinates
//! - CIE XYZ color space (D65)
//! - CIELAB (L*a*b*) and LCh color spaces
//! - Perceptual color difference (CIE76, CIE94, CIEDE2000)
//! - Hex string parsing and formatting
//! - Descriptive color naming
//! - The [`ColorValue`] boundary record

pub mod hex;
pub mod hsl;
pub mod lab;
pub mod lch;
pub mod name;
pub mod rgb;
pub mod value;
pub mod xyz;

pub use hex::{hex_to_rgb, parse_hex, parse_hex_lenient, rgb_to_hex};
pub use hsl::Hsl;
pub use lab::{Lab, delta_e_76, delta_e_94, delta_e_2000};
pub use lch::Lch;
pub use name::{basic_name, perceptual_name};
pub use rgb::Rgb;
pub use value::{ColorId, ColorValue, HslValue, RgbValue};
pub use xyz::{D65, Xyz};
