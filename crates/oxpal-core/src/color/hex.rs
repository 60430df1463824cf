//! Hex Color Codec
//!
//! Three parsing tiers with different contracts:
//!
//! - [`hex_to_rgb`]: unchecked hot path. Callers validate input upstream;
//!   malformed digits decode as zero rather than failing.
//! - [`parse_hex`]: strict `#RRGGBB` only, descriptive error otherwise.
//!   Used where a precise color is required (distance computations).
//! - [`parse_hex_lenient`]: tolerates shorthand, a missing `#`, and
//!   surrounding whitespace. Colors recovered this way are imprecise input
//!   and downgrade distance computations to the CIE76 fallback.

use crate::error::{Error, Result};

/// Format an RGB triple as canonical uppercase `#RRGGBB`
#[inline]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Decode a hex color without validation
///
/// Accepts an optional leading `#`. Any non-hex digit decodes as zero and
/// missing digits read as zero; garbage in, garbage out.
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let bytes = hex.as_bytes();
    let digits = match bytes.first() {
        Some(b'#') => &bytes[1..],
        _ => bytes,
    };

    let nibble = |i: usize| -> u8 { digits.get(i).copied().and_then(hex_val).unwrap_or(0) };

    [
        nibble(0) * 16 + nibble(1),
        nibble(2) * 16 + nibble(3),
        nibble(4) * 16 + nibble(5),
    ]
}

/// Parse a strict `#RRGGBB` hex color (case-insensitive)
pub fn parse_hex(hex: &str) -> Result<[u8; 3]> {
    let bytes = hex.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return Err(Error::InvalidHex(hex.to_string()));
    }

    let mut out = [0u8; 3];
    for (i, pair) in bytes[1..].chunks_exact(2).enumerate() {
        let hi = hex_val(pair[0]).ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
        let lo = hex_val(pair[1]).ok_or_else(|| Error::InvalidHex(hex.to_string()))?;
        out[i] = hi * 16 + lo;
    }
    Ok(out)
}

/// Parse a hex color leniently
///
/// Trims whitespace, allows the `#` to be absent, and expands 3-digit
/// shorthand (`#F80` → `#FF8800`). Returns None when the remainder is not
/// 3 or 6 hex digits.
pub fn parse_hex_lenient(hex: &str) -> Option<[u8; 3]> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed).as_bytes();

    match digits.len() {
        6 => {
            let mut out = [0u8; 3];
            for (i, pair) in digits.chunks_exact(2).enumerate() {
                out[i] = hex_val(pair[0])? * 16 + hex_val(pair[1])?;
            }
            Some(out)
        }
        3 => {
            let mut out = [0u8; 3];
            for (i, &d) in digits.iter().enumerate() {
                out[i] = hex_val(d)? * 17;
            }
            Some(out)
        }
        _ => None,
    }
}

#[inline]
fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
